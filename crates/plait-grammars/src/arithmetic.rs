//! Arithmetic expressions over `f64`.
//!
//! ```text
//! expression = term (("+" | "-") term)*
//! term       = power (("*" | "/") power)*
//! power      = factor ("^" power)?
//! factor     = number | "(" expression ")"
//! ```
//!
//! `+ - * /` associate to the left and `^` to the right. Whitespace is
//! allowed around operators and parentheses.

use plait::{
    alt, between, end_of_input, fold_l1, fold_r1, number, recursive, seq, token, whitespaces,
    ParseError, Parser,
};

type BinaryOp = fn(f64, f64) -> f64;

fn operator(symbol: &'static str, apply: BinaryOp) -> Parser<BinaryOp> {
    token(symbol).map(move |_| apply)
}

fn additive() -> Parser<BinaryOp> {
    alt([operator("+", |a, b| a + b), operator("-", |a, b| a - b)])
}

fn multiplicative() -> Parser<BinaryOp> {
    alt([operator("*", |a, b| a * b), operator("/", |a, b| a / b)])
}

fn exponent() -> Parser<BinaryOp> {
    operator("^", f64::powf)
}

/// An expression, without requiring the whole input to be consumed.
///
/// The grammar is built once, on first use; parenthesised sub-expressions
/// reuse it.
pub fn expression() -> Parser<f64> {
    recursive(|expression| {
        let factor = alt([number(), between(token("("), expression, token(")"))]);
        let power = fold_r1(factor, exponent());
        let term = fold_l1(power, multiplicative());
        fold_l1(term, additive())
    })
}

/// Evaluates `source`, which must contain a single expression and nothing
/// else apart from surrounding whitespace.
pub fn evaluate(source: &str) -> Result<f64, ParseError> {
    seq((whitespaces(), expression(), end_of_input()))
        .map(|(_, value, _)| value)
        .parse_value(source)
}

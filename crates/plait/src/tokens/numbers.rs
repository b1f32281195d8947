use ::regex::Regex;
use once_cell::sync::Lazy;

use super::pattern::from_regex;
use super::text::literal;
use super::whitespace::spaces;
use crate::combinators::{alt, seq};
use crate::messages;
use crate::outcome::ParseOutcome;
use crate::parser::Parser;
use crate::primitives::{fail, succeed};

static DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new("^[0-9]+").expect("digits regex"));
static SIGN: Lazy<Regex> = Lazy::new(|| Regex::new("^[+-]?").expect("sign regex"));

/// A single decimal digit and its value. Fails with "Expected a digit".
pub fn digit() -> Parser<u32> {
    Parser::new(|input, position| {
        let mut chars = input.chars();
        match chars.next().and_then(|c| c.to_digit(10).map(|value| (c, value))) {
            Some((c, value)) => {
                let consumed = &input[..c.len_utf8()];
                ParseOutcome::single(value, chars.as_str(), position.advance(consumed))
            }
            None => ParseOutcome::failure(messages::DIGIT, position),
        }
    })
}

/// One or more digits, followed by optional spaces which are skipped.
///
/// Fails with "Expected a natural number", including when the value does not
/// fit in a `u64`.
pub fn natural() -> Parser<u64> {
    from_regex(Regex::clone(&DIGITS))
        .bind(|digits| match digits.parse::<u64>() {
            Ok(value) => succeed(value),
            Err(_) => fail(),
        })
        .skip_trailing(spaces())
        .error(messages::NATURAL)
}

/// A natural number with an optional `-` or `+` sign.
///
/// Fails with "Expected an integer", including on `i64` overflow.
pub fn integer() -> Parser<i64> {
    alt([
        literal("-").bind(|_| natural()).bind(|n| signed(n, true)),
        literal("+").bind(|_| natural()).bind(|n| signed(n, false)),
        natural().bind(|n| signed(n, false)),
    ])
    .error(messages::INTEGER)
}

fn signed(magnitude: u64, negative: bool) -> Parser<i64> {
    let value = if negative {
        -i128::from(magnitude)
    } else {
        i128::from(magnitude)
    };
    match i64::try_from(value) {
        Ok(value) => succeed(value),
        Err(_) => fail(),
    }
}

/// A number with a fractional part, `[+-]?digits.digits`, followed by
/// optional spaces which are skipped.
///
/// Fails with "Expected a decimal number"; a plain integer is not a decimal.
pub fn decimal() -> Parser<f64> {
    seq((
        from_regex(Regex::clone(&SIGN)),
        from_regex(Regex::clone(&DIGITS)),
        literal("."),
        from_regex(Regex::clone(&DIGITS)),
    ))
    .bind(|(sign, integral, _, fractional)| {
        match format!("{sign}{integral}.{fractional}").parse::<f64>() {
            Ok(value) => succeed(value),
            Err(_) => fail(),
        }
    })
    .skip_trailing(spaces())
    .error(messages::DECIMAL)
}

/// A [`decimal`] or an [`integer`], as `f64`. Fails with "Expected a number".
pub fn number() -> Parser<f64> {
    alt([decimal(), integer().map(|value| value as f64)]).error(messages::NUMBER)
}

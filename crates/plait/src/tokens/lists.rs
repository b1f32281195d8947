use super::numbers::integer;
use super::pattern::from_regex;
use super::text::token;
use crate::combinators::{between, sep_by0};
use crate::parser::Parser;
use ::regex::Regex;
use once_cell::sync::Lazy;

static TRAILING_COMMA: Lazy<Regex> = Lazy::new(|| Regex::new("^,?").expect("comma regex"));

/// A bracketed, comma separated list, `[p, p, ...]`, with an optional
/// trailing comma.
pub fn list<T: Clone + 'static>(parser: Parser<T>) -> Parser<Vec<T>> {
    between(
        token("["),
        sep_by0(parser, token(",")).skip_trailing(from_regex(Regex::clone(&TRAILING_COMMA))),
        token("]"),
    )
}

/// A [`list`] of integers.
pub fn list_of_ints() -> Parser<Vec<i64>> {
    list(integer())
}

use ::regex::Regex;
use once_cell::sync::Lazy;

use super::pattern::from_regex;
use crate::messages;
use crate::parser::Parser;

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s").expect("whitespace regex"));
static WHITESPACES: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*").expect("whitespaces regex"));
static WHITESPACES1: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s+").expect("whitespaces regex"));
static SPACES: Lazy<Regex> = Lazy::new(|| Regex::new("^ *").expect("spaces regex"));
static NEWLINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\n").expect("newline regex"));
static NEWLINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\n*").expect("newlines regex"));
static NEWLINES1: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\n+").expect("newlines regex"));

/// A single whitespace character. Fails with "Expected a whitespace".
pub fn whitespace() -> Parser<String> {
    from_regex(Regex::clone(&WHITESPACE)).error(messages::WHITESPACE)
}

/// Zero or more whitespace characters, line breaks included.
pub fn whitespaces() -> Parser<String> {
    from_regex(Regex::clone(&WHITESPACES))
}

/// One or more whitespace characters.
pub fn whitespaces1() -> Parser<String> {
    from_regex(Regex::clone(&WHITESPACES1))
}

/// Zero or more space characters (` ` only).
pub fn spaces() -> Parser<String> {
    from_regex(Regex::clone(&SPACES))
}

pub fn newline() -> Parser<String> {
    from_regex(Regex::clone(&NEWLINE))
}

pub fn newlines() -> Parser<String> {
    from_regex(Regex::clone(&NEWLINES))
}

pub fn newlines1() -> Parser<String> {
    from_regex(Regex::clone(&NEWLINES1))
}

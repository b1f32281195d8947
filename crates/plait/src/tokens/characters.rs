use ::regex::Regex;
use once_cell::sync::Lazy;

use super::pattern::from_regex;
use crate::messages;
use crate::parser::Parser;

static LETTER: Lazy<Regex> = Lazy::new(|| Regex::new("^[a-zA-Z]").expect("letter regex"));
static LOWER: Lazy<Regex> = Lazy::new(|| Regex::new("^[a-z]").expect("lower regex"));
static UPPER: Lazy<Regex> = Lazy::new(|| Regex::new("^[A-Z]").expect("upper regex"));
static LETTERS: Lazy<Regex> = Lazy::new(|| Regex::new("^[a-zA-Z]*").expect("letters regex"));
static ALPHA_NUMS: Lazy<Regex> =
    Lazy::new(|| Regex::new("^[a-zA-Z0-9_]*").expect("alphanumerics regex"));

/// A single ASCII letter. Fails with "Expected a letter".
pub fn letter() -> Parser<String> {
    from_regex(Regex::clone(&LETTER)).error(messages::LETTER)
}

/// A single lowercase ASCII letter. Fails with "Expected a lowercase letter".
pub fn lower() -> Parser<String> {
    from_regex(Regex::clone(&LOWER)).error(messages::LOWER)
}

/// A single uppercase ASCII letter. Fails with "Expected an uppercase letter".
pub fn upper() -> Parser<String> {
    from_regex(Regex::clone(&UPPER)).error(messages::UPPER)
}

/// Zero or more letters. Never fails.
pub fn letters() -> Parser<String> {
    from_regex(Regex::clone(&LETTERS))
}

/// Zero or more letters, digits or underscores. Never fails.
pub fn alpha_nums() -> Parser<String> {
    from_regex(Regex::clone(&ALPHA_NUMS))
}

/// A letter followed by any alphanumerics.
pub fn identifier() -> Parser<String> {
    let rest = alpha_nums();
    letter().bind(move |first| rest.clone().map(move |rest| format!("{first}{rest}")))
}

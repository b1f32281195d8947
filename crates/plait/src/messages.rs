//! Default failure messages of the built-in parsers.
//!
//! These strings are part of the public contract; override them per parser
//! with [`Parser::error`](crate::Parser::error).

pub const END_OF_INPUT: &str = "Unexpected end of input";
pub const EXPECTED_END: &str = "Expected end of input";
pub const PREDICATE: &str = "Expected to match against predicate";

pub const LETTER: &str = "Expected a letter";
pub const LOWER: &str = "Expected a lowercase letter";
pub const UPPER: &str = "Expected an uppercase letter";
pub const WHITESPACE: &str = "Expected a whitespace";

pub const DIGIT: &str = "Expected a digit";
pub const NATURAL: &str = "Expected a natural number";
pub const INTEGER: &str = "Expected an integer";
pub const DECIMAL: &str = "Expected a decimal number";
pub const NUMBER: &str = "Expected a number";

/// Message of a failed [`literal`](crate::tokens::literal) match.
pub fn expected_literal(expected: &str, input: &str) -> String {
    let found: String = input.chars().take(expected.chars().count()).collect();
    let found = if found.is_empty() { "EOI" } else { found.as_str() };
    format!("Expected '{expected}', but got '{found}'")
}

/// Message of a failed [`regex`](crate::tokens::regex) match.
pub fn expected_pattern(pattern: &str) -> String {
    format!("Expected to match against regex {pattern}")
}

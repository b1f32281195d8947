use super::whitespace::whitespaces;
use crate::messages;
use crate::outcome::ParseOutcome;
use crate::parser::Parser;

/// Matches `text` exactly and yields it.
///
/// Fails with `Expected '<text>', but got '<found>'`, where `<found>` is the
/// input of the same length, or `EOI` at the end of input.
pub fn literal(text: impl Into<String>) -> Parser<String> {
    let text: String = text.into();
    Parser::new(move |input, position| match input.strip_prefix(text.as_str()) {
        Some(remaining) => ParseOutcome::single(text.clone(), remaining, position.advance(&text)),
        None => ParseOutcome::failure(messages::expected_literal(&text, input), position),
    })
}

/// A [`literal`] followed by optional whitespace, which is skipped.
pub fn token(text: impl Into<String>) -> Parser<String> {
    literal(text).skip_trailing(whitespaces())
}

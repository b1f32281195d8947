//! The smallest parsers every grammar is built from.

use crate::messages;
use crate::outcome::ParseOutcome;
use crate::parser::Parser;

/// Never succeeds and consumes nothing.
///
/// The default message is empty and meant to be replaced with
/// [`Parser::error`]. `fail` absorbs [`Parser::bind`]. In an alternation it
/// never changes a success, but when every alternative fails where `fail`
/// does, the earliest one listed is reported, which may be `fail` itself.
pub fn fail<T: 'static>() -> Parser<T> {
    Parser::new(|_, position| ParseOutcome::failure("", position))
}

/// Always succeeds with `value`, consuming nothing.
///
/// `succeed` is the identity of [`Parser::bind`]:
/// `succeed(x).bind(f)` behaves as `f(x)` and `p.bind(succeed)` as `p`.
pub fn succeed<T: Clone + 'static>(value: T) -> Parser<T> {
    Parser::new(move |input, position| ParseOutcome::single(value.clone(), input, position))
}

/// Consumes a single character, whatever it is.
pub fn any_char() -> Parser<String> {
    Parser::new(|input, position| {
        let mut chars = input.chars();
        match chars.next() {
            Some(c) => {
                let consumed = &input[..c.len_utf8()];
                ParseOutcome::single(consumed.to_string(), chars.as_str(), position.advance(consumed))
            }
            None => ParseOutcome::failure(messages::END_OF_INPUT, position),
        }
    })
}

/// Succeeds only when the input is exhausted.
pub fn end_of_input() -> Parser<()> {
    Parser::new(|input, position| {
        if input.is_empty() {
            ParseOutcome::single((), input, position)
        } else {
            ParseOutcome::failure(messages::EXPECTED_END, position)
        }
    })
}

use crate::outcome::{furthest, Failure, ParseOutcome};
use crate::parser::Parser;
use crate::primitives::succeed;

/// Runs every parser on the same input and keeps all their results.
///
/// Successes are concatenated in the order the parsers are listed. When all
/// of them fail, the furthest failure is reported. With no parsers at all it
/// behaves as [`fail`](crate::fail).
///
/// Every alternative is explored, so nesting `any` inside repetitions or
/// sequences multiplies the number of results.
pub fn any<T: 'static>(parsers: impl IntoIterator<Item = Parser<T>>) -> Parser<T> {
    let parsers: Vec<Parser<T>> = parsers.into_iter().collect();
    Parser::new(move |input, position| {
        ParseOutcome::collect_all(
            parsers.iter().map(|parser| parser.parse_at(input, position)),
            position,
        )
    })
}

/// Alias of [`any`], for search-space exploration.
pub fn explore<T: 'static>(parsers: impl IntoIterator<Item = Parser<T>>) -> Parser<T> {
    any(parsers)
}

/// Tries parsers in order and returns the complete outcome of the first one
/// that succeeds.
///
/// If none succeeds, the furthest failure among all attempts is reported.
pub fn alt<T: 'static>(parsers: impl IntoIterator<Item = Parser<T>>) -> Parser<T> {
    let parsers: Vec<Parser<T>> = parsers.into_iter().collect();
    Parser::new(move |input, position| {
        let mut failures = Vec::with_capacity(parsers.len());
        for parser in &parsers {
            match parser.parse_at(input, position) {
                ParseOutcome::Failure(failure) => failures.push(failure),
                success => return success,
            }
        }
        ParseOutcome::Failure(furthest(failures).unwrap_or_else(|| Failure::new("", position)))
    })
}

/// Alias of [`alt`].
pub fn first_of<T: 'static>(parsers: impl IntoIterator<Item = Parser<T>>) -> Parser<T> {
    alt(parsers)
}

/// Tries `parser`, succeeding with `None` without consuming input if it fails.
pub fn optional<T: Clone + 'static>(parser: Parser<T>) -> Parser<Option<T>> {
    alt([parser.map(Some), succeed(None)])
}

/// Tries `parser`, succeeding with `value` without consuming input if it fails.
pub fn defaulted<T: Clone + 'static>(parser: Parser<T>, value: T) -> Parser<T> {
    alt([parser, succeed(value)])
}

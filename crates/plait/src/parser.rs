//! The parser value and its monadic operations.
//!
//! A [`Parser`] wraps a pure function `(input, position) -> ParseOutcome`.
//! Building a parser never runs it: grammars are composed once and applied
//! many times. Every combinator returns a new parser; none mutates its
//! operands, which are shared behind an `Rc`.

use std::ops::BitOr;
use std::rc::Rc;

use crate::combinators::alt;
use crate::messages;
use crate::outcome::{Failure, ParseOutcome, ResultItem};
use crate::position::Position;
use crate::ParseError;

type ParseFn<T> = Rc<dyn Fn(&str, Position) -> ParseOutcome<'_, T>>;

/// A composable, immutable parser producing values of type `T`.
///
/// Cloning is cheap and shares the underlying parsing function.
pub struct Parser<T> {
    run: ParseFn<T>,
    error: Option<Rc<str>>,
}

impl<T> Clone for Parser<T> {
    fn clone(&self) -> Self {
        Parser {
            run: Rc::clone(&self.run),
            error: self.error.clone(),
        }
    }
}

impl<T> std::fmt::Debug for Parser<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Parser")
            .field("error", &self.error.as_deref())
            .finish_non_exhaustive()
    }
}

impl<T: 'static> Parser<T> {
    /// Wraps a parsing function.
    pub fn new<F>(run: F) -> Self
    where
        F: Fn(&str, Position) -> ParseOutcome<'_, T> + 'static,
    {
        Parser {
            run: Rc::new(run),
            error: None,
        }
    }

    /// Parses `input` from the start position `{line: 1, column: 0}`.
    pub fn parse<'a>(&self, input: &'a str) -> ParseOutcome<'a, T> {
        self.parse_at(input, Position::default())
    }

    /// Parses `input`, which starts at `position` in the original source.
    ///
    /// When the parser fails and an override message is set, the failure is
    /// reported at `position` with the override message, hiding where the
    /// underlying match diverged.
    pub fn parse_at<'a>(&self, input: &'a str, position: Position) -> ParseOutcome<'a, T> {
        let outcome = match (self.run)(input, position) {
            ParseOutcome::Success(items) if items.is_empty() => {
                ParseOutcome::failure("", position)
            }
            outcome => outcome,
        };

        match (&self.error, outcome) {
            (Some(message), ParseOutcome::Failure(_)) => ParseOutcome::failure(&**message, position),
            (_, outcome) => outcome,
        }
    }

    /// Parses `input` and returns the value of the first result.
    ///
    /// Ambiguous parses collapse to their first-listed interpretation. A
    /// failure becomes a [`ParseError`] quoting the offending source line.
    pub fn parse_value(&self, input: &str) -> Result<T, ParseError> {
        let failure = match self.parse(input) {
            ParseOutcome::Success(items) => match items.into_iter().next() {
                Some(item) => return Ok(item.value),
                None => Failure::new("", Position::default()),
            },
            ParseOutcome::Failure(failure) => failure,
        };

        log::debug!("parse failed at {}: {}", failure.position, failure.message);
        Err(ParseError::from_failure(failure, input))
    }

    /// Replaces the failure message, and reports failures at the position
    /// where this parser was invoked.
    pub fn error(self, message: impl Into<String>) -> Self {
        let message: String = message.into();
        Parser {
            run: self.run,
            error: (!message.is_empty()).then(|| Rc::from(message)),
        }
    }

    /// Transforms every successful value.
    pub fn map<U: 'static, F>(self, transform: F) -> Parser<U>
    where
        F: Fn(T) -> U + 'static,
    {
        Parser::new(move |input, position| self.parse_at(input, position).map(&transform))
    }

    /// Monadic sequencing: feeds every result into `transform` and runs the
    /// returned parser where that result stopped.
    ///
    /// Ambiguity multiplies: each result of `self` is continued separately and
    /// all downstream successes are kept, in order. When every continuation
    /// fails, the furthest failure is reported.
    pub fn bind<U: 'static, F>(self, transform: F) -> Parser<U>
    where
        F: Fn(T) -> Parser<U> + 'static,
    {
        Parser::new(move |input, position| {
            self.parse_at(input, position)
                .and_then(|value, remaining, position| transform(value).parse_at(remaining, position))
        })
    }

    /// Alias of [`Parser::bind`].
    pub fn flat_map<U: 'static, F>(self, transform: F) -> Parser<U>
    where
        F: Fn(T) -> Parser<U> + 'static,
    {
        self.bind(transform)
    }

    /// Keeps only the results satisfying `predicate`.
    pub fn filter<P>(self, predicate: P) -> Parser<T>
    where
        P: Fn(&T) -> bool + 'static,
    {
        Parser::new(move |input, position| match self.parse_at(input, position) {
            ParseOutcome::Success(items) => {
                let kept: Vec<_> = items
                    .into_iter()
                    .filter(|item| predicate(&item.value))
                    .collect();
                if kept.is_empty() {
                    ParseOutcome::failure(messages::PREDICATE, position)
                } else {
                    ParseOutcome::Success(kept)
                }
            }
            failure => failure,
        })
    }

    /// Succeeds with `value` without consuming anything when `self` fails.
    pub fn fallback(self, value: T) -> Parser<T>
    where
        T: Clone,
    {
        Parser::new(move |input, position| match self.parse_at(input, position) {
            ParseOutcome::Failure(_) => ParseOutcome::Success(vec![ResultItem::new(
                value.clone(),
                input,
                position,
            )]),
            success => success,
        })
    }

    /// Runs `trailing` after `self` and keeps the value of `self`.
    ///
    /// Chain calls to skip several parsers in order:
    /// `p.skip_trailing(a).skip_trailing(b)` parses `p a b`.
    pub fn skip_trailing<U: 'static>(self, trailing: Parser<U>) -> Parser<T>
    where
        T: Clone,
    {
        self.bind(move |value| trailing.clone().map(move |_| value.clone()))
    }

    /// Runs `leading` before `self` and keeps the value of `self`.
    ///
    /// Each call adds a parser in front: `p.skip_leading(b).skip_leading(a)`
    /// parses `a b p`.
    pub fn skip_leading<U: 'static>(self, leading: Parser<U>) -> Parser<T> {
        leading.bind(move |_| self.clone())
    }

    /// First-match alternation with a single other parser.
    pub fn or(self, other: Parser<T>) -> Parser<T> {
        alt([self, other])
    }
}

/// `a | b` is first-match alternation.
impl<T: 'static> BitOr for Parser<T> {
    type Output = Parser<T>;

    fn bitor(self, rhs: Parser<T>) -> Self::Output {
        self.or(rhs)
    }
}

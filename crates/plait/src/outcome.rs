//! Result model shared by every parse attempt.
//!
//! A parse either succeeds with one or more [`ResultItem`]s (several items
//! mean the grammar matched the same input in several ways) or fails with a
//! single [`Failure`]. When several failures compete, the one that got
//! furthest into the input is reported.

use crate::position::Position;

/// One concrete, successful parse.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultItem<'a, T> {
    pub value: T,
    /// Suffix of the original input left after this match.
    pub remaining: &'a str,
    /// Position at the end of the match.
    pub position: Position,
}

impl<'a, T> ResultItem<'a, T> {
    pub fn new(value: T, remaining: &'a str, position: Position) -> Self {
        Self {
            value,
            remaining,
            position,
        }
    }
}

/// A failed parse attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub message: String,
    pub position: Position,
}

impl Failure {
    pub fn new(message: impl Into<String>, position: Position) -> Self {
        Self {
            message: message.into(),
            position,
        }
    }
}

/// Outcome of running a parser.
///
/// `Success` never carries an empty list; an empty match set is a `Failure`.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseOutcome<'a, T> {
    Success(Vec<ResultItem<'a, T>>),
    Failure(Failure),
}

impl<'a, T> ParseOutcome<'a, T> {
    /// A success with a single item.
    pub fn single(value: T, remaining: &'a str, position: Position) -> Self {
        ParseOutcome::Success(vec![ResultItem::new(value, remaining, position)])
    }

    pub fn failure(message: impl Into<String>, position: Position) -> Self {
        ParseOutcome::Failure(Failure::new(message, position))
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ParseOutcome::Success(_))
    }

    /// Successful items, empty on failure.
    pub fn results(&self) -> &[ResultItem<'a, T>] {
        match self {
            ParseOutcome::Success(items) => items,
            ParseOutcome::Failure(_) => &[],
        }
    }

    pub fn failure_ref(&self) -> Option<&Failure> {
        match self {
            ParseOutcome::Success(_) => None,
            ParseOutcome::Failure(failure) => Some(failure),
        }
    }

    /// Applies `transform` to every successful value.
    pub fn map<U>(self, mut transform: impl FnMut(T) -> U) -> ParseOutcome<'a, U> {
        match self {
            ParseOutcome::Success(items) => ParseOutcome::Success(
                items
                    .into_iter()
                    .map(|item| ResultItem::new(transform(item.value), item.remaining, item.position))
                    .collect(),
            ),
            ParseOutcome::Failure(failure) => ParseOutcome::Failure(failure),
        }
    }

    /// Continues every successful item with `next` and concatenates the
    /// downstream successes in order.
    ///
    /// If every continuation fails, the furthest failure is returned, ties
    /// going to the earliest item.
    pub fn and_then<U>(
        self,
        mut next: impl FnMut(T, &'a str, Position) -> ParseOutcome<'a, U>,
    ) -> ParseOutcome<'a, U> {
        let items = match self {
            ParseOutcome::Success(items) => items,
            ParseOutcome::Failure(failure) => return ParseOutcome::Failure(failure),
        };

        let mut successes = Vec::new();
        let mut failures = Vec::new();
        for item in items {
            match next(item.value, item.remaining, item.position) {
                ParseOutcome::Success(mut more) => successes.append(&mut more),
                ParseOutcome::Failure(failure) => failures.push(failure),
            }
        }

        if successes.is_empty() {
            // No failures either means there were no items to continue.
            match furthest(failures) {
                Some(failure) => ParseOutcome::Failure(failure),
                None => ParseOutcome::Success(successes),
            }
        } else {
            ParseOutcome::Success(successes)
        }
    }

    /// Combines the outcomes of alternatives run on the same input: all
    /// successes concatenated, or the furthest failure when none succeeded.
    pub fn collect_all(
        outcomes: impl IntoIterator<Item = ParseOutcome<'a, T>>,
        position: Position,
    ) -> ParseOutcome<'a, T> {
        let mut successes = Vec::new();
        let mut failures = Vec::new();
        for outcome in outcomes {
            match outcome {
                ParseOutcome::Success(mut items) => successes.append(&mut items),
                ParseOutcome::Failure(failure) => failures.push(failure),
            }
        }

        if successes.is_empty() {
            ParseOutcome::Failure(
                furthest(failures).unwrap_or_else(|| Failure::new("", position)),
            )
        } else {
            ParseOutcome::Success(successes)
        }
    }
}

/// Picks the failure with the greatest position; ties keep the earliest.
pub fn furthest(failures: impl IntoIterator<Item = Failure>) -> Option<Failure> {
    failures.into_iter().fold(None, |best, candidate| match best {
        Some(best) if best.position >= candidate.position => Some(best),
        _ => Some(candidate),
    })
}

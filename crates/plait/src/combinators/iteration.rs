use std::ops::{Bound, RangeBounds};

use crate::outcome::{furthest, Failure, ParseOutcome, ResultItem};
use crate::parser::Parser;
use crate::position::Position;
use crate::primitives::succeed;
use crate::GrammarError;

/// Inclusive repetition bounds; `max: None` is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Bounds {
    pub min: usize,
    pub max: Option<usize>,
}

impl Bounds {
    pub fn exactly(count: usize) -> Self {
        Bounds {
            min: count,
            max: Some(count),
        }
    }

    pub fn at_least(min: usize) -> Self {
        Bounds { min, max: None }
    }

    /// Converts a range, rejecting ranges that contain no count.
    pub fn from_range(
        combinator: &'static str,
        range: impl RangeBounds<usize>,
    ) -> Result<Self, GrammarError> {
        let inverted = GrammarError::InvertedRange { combinator };
        let min = match range.start_bound() {
            Bound::Included(&min) => min,
            Bound::Excluded(&min) => min.checked_add(1).ok_or_else(|| inverted.clone())?,
            Bound::Unbounded => 0,
        };
        let max = match range.end_bound() {
            Bound::Included(&max) => Some(max),
            Bound::Excluded(&max) => Some(max.checked_sub(1).ok_or_else(|| inverted.clone())?),
            Bound::Unbounded => None,
        };

        match max {
            Some(max) if max < min => Err(inverted),
            _ => Ok(Bounds { min, max }),
        }
    }

    /// Like [`Bounds::from_range`], also requiring at least one item.
    pub fn from_range_nonzero(
        combinator: &'static str,
        range: impl RangeBounds<usize>,
    ) -> Result<Self, GrammarError> {
        let bounds = Self::from_range(combinator, range)?;
        if bounds.min < 1 {
            return Err(GrammarError::ZeroMinimum { combinator });
        }
        Ok(bounds)
    }

    /// Bounds for the items following a first, already parsed one.
    pub fn after_first(self) -> Self {
        Bounds {
            min: self.min.saturating_sub(1),
            max: self.max.map(|max| max.saturating_sub(1)),
        }
    }

    fn reached_max(&self, count: usize) -> bool {
        self.max.is_some_and(|max| count >= max)
    }
}

/// Greedy bounded repetition.
///
/// Keeps extending the match for as long as the parser succeeds and the upper
/// bound allows. Shorter matches are only returned where extending fails, so
/// the result never contains prefixes of a longer match.
pub(crate) fn repeated<T: Clone + 'static>(parser: Parser<T>, bounds: Bounds) -> Parser<Vec<T>> {
    if bounds.max == Some(0) {
        return succeed(Vec::new());
    }
    Parser::new(move |input, position| repeat_from(&parser, bounds, input, position))
}

/// A partially matched repetition whose item alternatives are still being
/// extended, one at a time.
struct Frame<'a, T> {
    matched: Vec<T>,
    input: &'a str,
    position: Position,
    pending: std::vec::IntoIter<ResultItem<'a, T>>,
    successes: Vec<ResultItem<'a, Vec<T>>>,
    failures: Vec<Failure>,
}

enum Step<'a, T> {
    Done(ParseOutcome<'a, Vec<T>>),
    Extend(Frame<'a, T>),
}

impl<'a, T> Frame<'a, T> {
    fn absorb(&mut self, outcome: ParseOutcome<'a, Vec<T>>) {
        match outcome {
            ParseOutcome::Success(mut items) => self.successes.append(&mut items),
            ParseOutcome::Failure(failure) => self.failures.push(failure),
        }
    }

    fn finish(self, bounds: Bounds) -> ParseOutcome<'a, Vec<T>> {
        if !self.successes.is_empty() {
            ParseOutcome::Success(self.successes)
        } else if self.matched.len() >= bounds.min {
            ParseOutcome::single(self.matched, self.input, self.position)
        } else {
            ParseOutcome::Failure(
                furthest(self.failures).unwrap_or_else(|| Failure::new("", self.position)),
            )
        }
    }
}

fn step<'a, T: Clone + 'static>(
    parser: &Parser<T>,
    bounds: Bounds,
    matched: Vec<T>,
    input: &'a str,
    position: Position,
) -> Step<'a, T> {
    if bounds.reached_max(matched.len()) {
        return Step::Done(ParseOutcome::single(matched, input, position));
    }
    match parser.parse_at(input, position) {
        ParseOutcome::Success(items) => Step::Extend(Frame {
            matched,
            input,
            position,
            pending: items.into_iter(),
            successes: Vec::new(),
            failures: Vec::new(),
        }),
        ParseOutcome::Failure(_) if matched.len() >= bounds.min => {
            Step::Done(ParseOutcome::single(matched, input, position))
        }
        ParseOutcome::Failure(failure) => Step::Done(ParseOutcome::Failure(failure)),
    }
}

/// Depth-first over every way of extending the match, with an explicit
/// stack so long repetitions do not grow the call stack. Results come out in
/// the order of the item alternatives that produced them.
fn repeat_from<'a, T: Clone + 'static>(
    parser: &Parser<T>,
    bounds: Bounds,
    input: &'a str,
    position: Position,
) -> ParseOutcome<'a, Vec<T>> {
    let mut current = match step(parser, bounds, Vec::new(), input, position) {
        Step::Done(outcome) => return outcome,
        Step::Extend(frame) => frame,
    };
    let mut parents: Vec<Frame<'a, T>> = Vec::new();

    loop {
        match current.pending.next() {
            Some(item) => {
                let mut longer = Vec::with_capacity(current.matched.len() + 1);
                longer.extend(current.matched.iter().cloned());
                longer.push(item.value);
                match step(parser, bounds, longer, item.remaining, item.position) {
                    Step::Done(outcome) => current.absorb(outcome),
                    Step::Extend(child) => parents.push(std::mem::replace(&mut current, child)),
                }
            }
            None => {
                let outcome = current.finish(bounds);
                match parents.pop() {
                    Some(parent) => {
                        current = parent;
                        current.absorb(outcome);
                    }
                    None => return outcome,
                }
            }
        }
    }
}

/// Parses exactly `times` occurrences of `parser`.
///
/// `repeat(p, 0)` succeeds with an empty list without consuming input.
pub fn repeat<T: Clone + 'static>(parser: Parser<T>, times: usize) -> Parser<Vec<T>> {
    repeated(parser, Bounds::exactly(times))
}

/// Parses between `range.start` and `range.end` occurrences of `parser`,
/// as many as possible.
///
/// Fails to build when the range is empty, e.g. `5..=2`.
pub fn repeat_range<T: Clone + 'static>(
    parser: Parser<T>,
    range: impl RangeBounds<usize>,
) -> Result<Parser<Vec<T>>, GrammarError> {
    Ok(repeated(parser, Bounds::from_range("repeat_range", range)?))
}

/// Zero or more occurrences, as many as possible. Never fails.
pub fn many0<T: Clone + 'static>(parser: Parser<T>) -> Parser<Vec<T>> {
    repeated(parser, Bounds::at_least(0))
}

/// One or more occurrences, as many as possible.
pub fn many1<T: Clone + 'static>(parser: Parser<T>) -> Parser<Vec<T>> {
    repeated(parser, Bounds::at_least(1))
}

/// Items matched by `parser`, separated by `separator`, with an item count
/// inside `range`.
///
/// The separator values are discarded. A trailing separator is not consumed:
/// `sep_by(digit(), literal(","), 0..)` on `"1,2,"` leaves `","`.
pub fn sep_by<T: Clone + 'static, S: 'static>(
    parser: Parser<T>,
    separator: Parser<S>,
    range: impl RangeBounds<usize>,
) -> Result<Parser<Vec<T>>, GrammarError> {
    let bounds = Bounds::from_range("sep_by", range)?;
    Ok(separated(parser, separator, bounds))
}

/// Zero or more separated items.
pub fn sep_by0<T: Clone + 'static, S: 'static>(
    parser: Parser<T>,
    separator: Parser<S>,
) -> Parser<Vec<T>> {
    separated(parser, separator, Bounds::at_least(0))
}

/// One or more separated items.
pub fn sep_by1<T: Clone + 'static, S: 'static>(
    parser: Parser<T>,
    separator: Parser<S>,
) -> Parser<Vec<T>> {
    separated(parser, separator, Bounds::at_least(1))
}

fn separated<T: Clone + 'static, S: 'static>(
    parser: Parser<T>,
    separator: Parser<S>,
    bounds: Bounds,
) -> Parser<Vec<T>> {
    if bounds.max == Some(0) {
        return succeed(Vec::new());
    }

    let rest = repeated(parser.clone().skip_leading(separator), bounds.after_first());
    let items = parser.bind(move |first| {
        rest.clone().map(move |rest| {
            let mut items = Vec::with_capacity(rest.len() + 1);
            items.push(first.clone());
            items.extend(rest);
            items
        })
    });

    if bounds.min == 0 {
        items.fallback(Vec::new())
    } else {
        items
    }
}

/// Every possible number of consecutive matches, longest first, down to the
/// empty match. Never fails.
///
/// Unlike [`many0`] this keeps all the shorter prefixes, so the results grow
/// with the number of matches.
pub fn iterate<T: Clone + 'static>(parser: Parser<T>) -> Parser<Vec<T>> {
    Parser::new(move |input, position| iterate_from(&parser, input, position))
}

fn iterate_from<'a, T: Clone + 'static>(
    parser: &Parser<T>,
    input: &'a str,
    position: Position,
) -> ParseOutcome<'a, Vec<T>> {
    let longer = parser
        .parse_at(input, position)
        .and_then(|item, remaining, next| {
            iterate_from(parser, remaining, next).map(|rest| {
                let mut items = Vec::with_capacity(rest.len() + 1);
                items.push(item.clone());
                items.extend(rest);
                items
            })
        });

    ParseOutcome::collect_all([longer, ParseOutcome::single(Vec::new(), input, position)], position)
}

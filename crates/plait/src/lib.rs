//! Plait
//!
//! Parser combinators that explore every way a grammar can match.
//! A [`Parser`] is an immutable value wrapping `(input, position) -> outcome`;
//! grammars are built by composing small parsers with combinators and are
//! only executed by [`Parser::parse`] or [`Parser::parse_value`].
//!
//! Parsers are non-deterministic: a success carries every interpretation of
//! the input, in order. [`any`] and [`iterate`] enumerate all matches, while
//! [`alt`], [`many0`] and the fold family commit to the first one that
//! works. When nothing matches, the failure that progressed furthest into the
//! input is reported.
//!
//! # Example
//!
//! ```
//! use plait::{digit, fold_l1, literal, Parser};
//!
//! let plus = literal("+").map(|_| |a: u32, b: u32| a + b);
//! let sum: Parser<u32> = fold_l1(digit(), plus);
//!
//! assert_eq!(sum.parse_value("1+2+3"), Ok(6));
//! ```
//!
//! # Limitations
//!
//! - [`iterate`] recurses once per matched item, so very long enumerations
//!   grow the call stack. The greedy repetitions and folds do not.
//! - Grammars that refer to themselves through [`lazy`], [`memoize`] or
//!   [`recursive`] recurse once per nesting level of the input, such as each
//!   parenthesis or nested element, so deeply nested input can exhaust the
//!   stack.
//! - Repeating a parser that succeeds without consuming input, with no upper
//!   bound, never terminates.
//! - [`any`], [`explore`], [`iterate`] and ambiguous parts of [`seq`] multiply
//!   the number of results. Prefer [`alt`] and [`many0`] when the grammar is
//!   meant to be deterministic.
//! - Parsers share state through `Rc` and are not `Send`.

pub mod combinators;
pub mod messages;
pub mod outcome;
pub mod parser;
pub mod position;
pub mod primitives;
pub mod tokens;

pub use combinators::*;
pub use outcome::{Failure, ParseOutcome, ResultItem};
pub use parser::Parser;
pub use position::Position;
pub use primitives::{any_char, end_of_input, fail, succeed};
pub use tokens::*;

/// Diagnostic for a failed [`Parser::parse_value`], quoting the offending
/// source line with a caret under the failing column.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("at line {line}, column {column}{excerpt}\nReason: {message}")]
pub struct ParseError {
    pub message: String,
    pub line: usize,
    pub column: usize,
    /// `\n\t<source line>\n\t<spaces>^`, or empty when the line is blank.
    pub excerpt: String,
}

impl ParseError {
    pub fn from_failure(failure: Failure, source: &str) -> Self {
        let Position { line, column } = failure.position;
        let excerpt = match source.split('\n').nth(line.saturating_sub(1)) {
            Some(snippet) if !snippet.is_empty() => {
                format!("\n\t{snippet}\n\t{}^", " ".repeat(column))
            }
            _ => String::new(),
        };

        ParseError {
            message: failure.message,
            line,
            column,
            excerpt,
        }
    }
}

/// Invalid arguments given while building a grammar.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GrammarError {
    #[error("{combinator}: max cannot be less than min")]
    InvertedRange { combinator: &'static str },

    #[error("{combinator}: min cannot be less than 1")]
    ZeroMinimum { combinator: &'static str },

    #[error("invalid regex: {0}")]
    Regex(#[from] ::regex::Error),
}

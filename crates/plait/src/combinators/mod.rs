//! Combinators building new parsers out of existing ones.
//!
//! - [`alternation`]: collect-all (`any`) and first-match (`alt`) choice.
//! - [`sequencing`]: tuple sequences and the open/body/close pattern.
//! - [`iteration`]: bounded, separated and exhaustive repetition.
//! - [`reduction`]: left and right associative folds for operator chains.
//! - [`recursion`]: deferred and one-time construction for self-referential grammars.

mod alternation;
mod iteration;
mod recursion;
mod reduction;
mod sequencing;

pub use alternation::{alt, any, defaulted, explore, first_of, optional};
pub use iteration::{iterate, many0, many1, repeat, repeat_range, sep_by, sep_by0, sep_by1};
pub use recursion::{lazy, memoize, recursive};
pub use reduction::{fold_l, fold_l1, fold_r, fold_r1};
pub use sequencing::{between, seq, seq_all, Sequence};

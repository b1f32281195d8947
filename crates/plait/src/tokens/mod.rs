//! Ready-made token parsers: characters, numbers, literals, whitespace and
//! lists, plus regex-backed tokens for anything else.
//!
//! Every token documents its default failure message; those messages come
//! from [`crate::messages`] and can be replaced with [`Parser::error`].
//!
//! [`Parser::error`]: crate::Parser::error

mod characters;
mod lists;
mod numbers;
mod pattern;
mod text;
mod whitespace;

pub use characters::{alpha_nums, identifier, letter, letters, lower, upper};
pub use lists::{list, list_of_ints};
pub use numbers::{decimal, digit, integer, natural, number};
pub use pattern::{from_regex, regex};
pub use text::{literal, token};
pub use whitespace::{newline, newlines, newlines1, spaces, whitespace, whitespaces, whitespaces1};

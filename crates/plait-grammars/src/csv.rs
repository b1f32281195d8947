//! A small CSV dialect: a header row of quoted names, then rows whose cells
//! are quoted words or natural numbers.
//!
//! ```text
//! "name", "age"
//! "Alex",  41
//! ```
//!
//! Every row, the last one included, ends with a line break.

use std::collections::BTreeMap;
use std::fmt;

use plait::{alt, between, letters, literal, many1, natural, newline, sep_by0, spaces, Parser};

/// A single CSV value.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Cell {
    Text(String),
    Number(u64),
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(text) => write!(f, "{text}"),
            Cell::Number(number) => write!(f, "{number}"),
        }
    }
}

/// A row keyed by the header names. Later duplicate names win.
pub type Record = BTreeMap<String, Cell>;

fn comma() -> Parser<String> {
    literal(",").skip_trailing(spaces())
}

fn quoted() -> Parser<String> {
    between(literal("\""), letters(), literal("\""))
}

fn cell() -> Parser<Cell> {
    alt([quoted().map(Cell::Text), natural().map(Cell::Number)])
}

/// The header row: the list of column names.
pub fn headings() -> Parser<Vec<String>> {
    sep_by0(quoted(), comma()).skip_trailing(newline())
}

/// A data row.
pub fn row() -> Parser<Vec<Cell>> {
    sep_by0(cell(), comma()).skip_trailing(newline())
}

/// A header row followed by one or more data rows.
///
/// Cells are paired with the header names by column; cells beyond the last
/// heading are dropped.
pub fn csv() -> Parser<Vec<Record>> {
    let rows = many1(row());
    headings().bind(move |names| {
        rows.clone().map(move |rows| {
            rows.into_iter()
                .map(|cells| names.iter().cloned().zip(cells).collect::<Record>())
                .collect::<Vec<_>>()
        })
    })
}

//! Example grammars written against the public `plait` API.
//!
//! - [`arithmetic`]: floating point expressions with precedence climbing.
//! - [`csv`]: a quoted header row followed by text and number rows.
//! - [`html`]: HTML fragments and documents, with a serializer.

pub mod arithmetic;
pub mod csv;
pub mod html;

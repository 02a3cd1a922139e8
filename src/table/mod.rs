//! Pipe-delimited table engine.
//!
//! This module handles:
//! - Locating a table's boundaries from a cursor position
//! - Parsing table lines into a column-major content model
//! - Structural edits (insert/swap rows and columns)
//! - Re-serializing the model into aligned markdown

mod cursor;
mod edit;
mod locate;
mod model;
mod parse;
mod pipeline;
mod render;

pub use cursor::map_cursor;
pub use locate::{TableRegion, is_table_line, locate};
pub use model::{RowCursor, TableContent};
pub use parse::parse;
pub use pipeline::{TableAction, transform};
pub use render::{Justify, MIN_COLUMN_WIDTH, render};

use thiserror::Error;

/// Structural failures of the table engine.
///
/// Every error aborts the transformation before any document mutation; these
/// are deterministic failures and are never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// The cursor's line does not begin with a pipe.
    #[error("line {0} is not part of a pipe-delimited table")]
    NotATable(usize),
    /// Ragged rows, missing separator, or too few lines.
    #[error("malformed table: {0}")]
    Malformed(String),
    /// A row swap was requested on a table without data rows.
    #[error("table has no data rows")]
    Empty,
}

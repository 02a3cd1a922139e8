//! Column-major table content model.

/// Position of the cursor relative to a parsed table.
///
/// Replaces the `-1` row sentinel of the usual "distance from the data rows"
/// arithmetic with an explicit tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowCursor {
    /// Cursor sits on the header or separator line. Row inserts target the
    /// slot directly after the header.
    Header,
    /// Forward index from the first data row.
    Data(usize),
}

/// Parsed table content, stored column-major.
///
/// The outer vector indexes columns; each column is an ordered sequence of
/// cell strings with the header cell at row 0. The separator row is never
/// stored and is regenerated on render. Invariant: all columns have the same
/// length, and every column holds at least the header cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableContent {
    pub(crate) columns: Vec<Vec<String>>,
}

impl TableContent {
    /// Build content from pre-transposed columns.
    pub fn from_columns(columns: Vec<Vec<String>>) -> Self {
        debug_assert!(
            columns.windows(2).all(|w| w[0].len() == w[1].len()),
            "columns must be rectangular"
        );
        Self { columns }
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Number of rows per column, header included.
    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, Vec::len)
    }

    /// Number of data rows (rows below the header).
    pub fn data_row_count(&self) -> usize {
        self.row_count().saturating_sub(1)
    }

    /// All columns, header cells first.
    pub fn columns(&self) -> &[Vec<String>] {
        &self.columns
    }

    /// The cell at `(col, row)`, if both indexes are in range.
    pub fn cell(&self, col: usize, row: usize) -> Option<&str> {
        self.columns.get(col)?.get(row).map(String::as_str)
    }

    /// Iterate over one row, left to right.
    pub fn row(&self, row: usize) -> impl Iterator<Item = &str> {
        self.columns
            .iter()
            .filter_map(move |col| col.get(row).map(String::as_str))
    }

    /// True when every column has the same length.
    pub fn is_rectangular(&self) -> bool {
        self.columns.windows(2).all(|w| w[0].len() == w[1].len())
    }
}

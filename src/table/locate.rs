//! Table boundary discovery.

use super::TableError;

/// Inclusive line range of a table within a document.
///
/// Every line in the range begins, after leading whitespace, with `|`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableRegion {
    /// First table line.
    pub start: usize,
    /// Last table line.
    pub end: usize,
}

impl TableRegion {
    /// Number of lines in the region.
    pub const fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// Regions always span at least the cursor line.
    pub const fn is_empty(&self) -> bool {
        false
    }
}

/// True when a line belongs to a pipe-delimited table.
pub fn is_table_line(line: &str) -> bool {
    line.trim_start().starts_with('|')
}

/// Find the contiguous run of table lines containing `cursor_line`.
///
/// Scans upward and downward from the cursor line while lines keep starting
/// with `|`; the buffer edges count as inclusive boundaries. Fails with
/// [`TableError::NotATable`] when the cursor's own line is not a table line.
pub fn locate(lines: &[String], cursor_line: usize) -> Result<TableRegion, TableError> {
    if !lines.get(cursor_line).is_some_and(|l| is_table_line(l)) {
        return Err(TableError::NotATable(cursor_line));
    }

    let mut start = cursor_line;
    while start > 0 && is_table_line(&lines[start - 1]) {
        start -= 1;
    }

    let mut end = cursor_line;
    while end + 1 < lines.len() && is_table_line(&lines[end + 1]) {
        end += 1;
    }

    Ok(TableRegion { start, end })
}

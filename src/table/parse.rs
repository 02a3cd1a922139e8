//! Table line parsing into the column-major model.

use super::TableError;
use super::model::TableContent;

/// Parse a contiguous run of table lines into [`TableContent`].
///
/// Each line is split on `|`; the empty fragments produced by the leading and
/// trailing pipes are discarded and the remaining cells trimmed. Separator
/// rows are dropped (they are regenerated on render). Remaining rows are
/// transposed into column-major order with the header at row 0.
///
/// Fails with [`TableError::Malformed`] when the region has fewer than two
/// lines, lacks a separator row, or contains rows with differing cell counts.
pub fn parse(lines: &[String]) -> Result<TableContent, TableError> {
    if lines.len() < 2 {
        return Err(TableError::Malformed(
            "a table needs at least a header and a separator line".to_string(),
        ));
    }

    let mut rows: Vec<Vec<String>> = Vec::with_capacity(lines.len());
    let mut saw_separator = false;
    for line in lines {
        // Indentation is not cell content; trim before splitting so the
        // fragments outside the bounding pipes stay empty.
        let cells: Vec<String> = line
            .trim()
            .split('|')
            .filter(|fragment| !fragment.is_empty())
            .map(|fragment| fragment.trim().to_string())
            .collect();
        if !cells.is_empty() && cells.iter().all(|cell| is_separator_cell(cell)) {
            saw_separator = true;
            continue;
        }
        rows.push(cells);
    }

    if !saw_separator {
        return Err(TableError::Malformed(
            "missing header separator row".to_string(),
        ));
    }
    let Some(first) = rows.first() else {
        return Err(TableError::Malformed("no header row".to_string()));
    };
    let width = first.len();
    if width == 0 {
        return Err(TableError::Malformed("header row has no cells".to_string()));
    }
    for row in &rows[1..] {
        if row.len() != width {
            return Err(TableError::Malformed(format!(
                "row has {} cells, expected {width}",
                row.len()
            )));
        }
    }

    let mut columns: Vec<Vec<String>> = (0..width)
        .map(|_| Vec::with_capacity(rows.len()))
        .collect();
    for row in rows {
        for (col, cell) in row.into_iter().enumerate() {
            columns[col].push(cell);
        }
    }
    Ok(TableContent::from_columns(columns))
}

/// A separator cell is a run of dashes, optionally bracketed by alignment
/// colons (`---`, `:--`, `:-:`).
fn is_separator_cell(cell: &str) -> bool {
    let body = cell.strip_prefix(':').unwrap_or(cell);
    let body = body.strip_suffix(':').unwrap_or(body);
    !body.is_empty() && body.chars().all(|c| c == '-')
}

//! Absolute-to-table cursor mapping.

use crate::editor::Cursor;

use super::locate::TableRegion;
use super::model::RowCursor;

/// Map an absolute document cursor to a table-relative position.
///
/// The header and separator lines both map to [`RowCursor::Header`]; any
/// other line maps to its distance from the first data row. The column is
/// derived by counting pipe separators: with `nb_col` pipes on the cursor's
/// line and `right` of them strictly right of the cursor's byte column, the
/// column index is `nb_col - right`, pulled back by one when the cursor sits
/// past the final separator.
pub fn map_cursor(
    lines: &[String],
    cursor: Cursor,
    region: &TableRegion,
    data_rows: usize,
) -> (RowCursor, usize) {
    let row = if cursor.line <= region.start + 1 {
        RowCursor::Header
    } else {
        let from_end = region.end - cursor.line + 1;
        RowCursor::Data(data_rows.saturating_sub(from_end))
    };

    let line = lines.get(cursor.line).map_or("", String::as_str);
    let nb_col = line.matches('|').count();
    let right = line
        .char_indices()
        .filter(|&(i, c)| c == '|' && i > cursor.col)
        .count();
    let mut col = nb_col - right;
    if col == nb_col && col > 0 {
        col -= 1;
    }

    (row, col)
}

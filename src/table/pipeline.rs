//! One-shot table transformation: locate, parse, map, edit, render.

use tracing::debug;

use crate::config::EditorConfig;
use crate::editor::{Cursor, DocumentEdit};

use super::TableError;
use super::cursor::map_cursor;
use super::locate::locate;
use super::model::RowCursor;
use super::parse::parse;
use super::render::render;

/// A user-requested table edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableAction {
    AddColumn,
    AddRow,
    SwapColumn,
    SwapRow,
}

/// Apply one table action at the cursor and produce the replacement splice.
///
/// The whole table is re-rendered in memory first; the returned
/// [`DocumentEdit`] replaces the original region in a single splice, so a
/// failure at any stage leaves the document untouched. Swapping rows in a
/// table without data rows fails with [`TableError::Empty`]; a swap cursor
/// on the header or separator line targets the first data row.
pub fn transform(
    lines: &[String],
    cursor: Cursor,
    action: TableAction,
    config: &EditorConfig,
) -> Result<DocumentEdit, TableError> {
    let region = locate(lines, cursor.line)?;
    let mut content = parse(&lines[region.start..=region.end])?;
    let (row, col) = map_cursor(lines, cursor, &region, content.data_row_count());
    if config.debug_enabled {
        debug!(
            start = region.start,
            end = region.end,
            ?row,
            col,
            ?action,
            "transforming table"
        );
    }

    match action {
        TableAction::AddColumn => content.insert_column(col),
        TableAction::AddRow => content.insert_row(row),
        TableAction::SwapColumn => content.swap_column(col),
        TableAction::SwapRow => {
            if content.data_row_count() == 0 {
                return Err(TableError::Empty);
            }
            let row = match row {
                RowCursor::Header => 0,
                RowCursor::Data(index) => index,
            };
            content.swap_row(row);
        }
    }

    let rendered = render(&content, config.justify);
    let line = cursor.line.min(region.start + rendered.len() - 1);
    let max_col = rendered.get(line - region.start).map_or(0, String::len);
    Ok(DocumentEdit {
        start: region.start,
        deleted: region.len(),
        lines: rendered,
        cursor: Some(Cursor::at(line, cursor.col.min(max_col))),
    })
}

//! Fenced code block insertion.

use crate::editor::{Cursor, DocumentEdit};

/// Insert an empty fenced code block below the cursor line.
///
/// The splice adds an opening fence (tagged with `language` when given), a
/// blank line, and a closing fence; the new cursor lands on the blank line,
/// ready for typing.
pub fn insert_fence(cursor: Cursor, language: Option<&str>) -> DocumentEdit {
    let open = language.map_or_else(|| "```".to_string(), |lang| format!("```{lang}"));
    DocumentEdit {
        start: cursor.line + 1,
        deleted: 0,
        lines: vec![open, String::new(), "```".to_string()],
        cursor: Some(Cursor::at(cursor.line + 2, 0)),
    }
}

//! Checklist task helpers.
//!
//! Single-line edits over GFM task-list items (`- [ ]` / `- [x]`). Invalid
//! targets are not errors: the helpers return `None` and leave the document
//! alone, emitting a debug diagnostic instead.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::editor::{Cursor, DocumentEdit};

static TASK_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\s*[-*+]\s+)\[([ xX])\]\s?(.*)$").expect("task pattern"));

static LIST_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\s*)([-*+])\s+(.*)$").expect("list pattern"));

/// Flip a task line between checked and unchecked.
///
/// Returns `None` when the line is not a task item.
pub fn toggle_task(line: &str) -> Option<String> {
    let caps = TASK_LINE.captures(line)?;
    let state = if &caps[2] == " " { "x" } else { " " };
    Some(format!("{}[{}] {}", &caps[1], state, &caps[3]).trim_end().to_string())
}

/// Turn a plain line or list item into an unchecked task.
///
/// List markers and indentation are preserved; a bare line gains a `- `
/// marker. Returns `None` for blank lines and lines that already are tasks.
pub fn create_task(line: &str) -> Option<String> {
    if TASK_LINE.is_match(line) || line.trim().is_empty() {
        return None;
    }
    if let Some(caps) = LIST_ITEM.captures(line) {
        return Some(format!("{}{} [ ] {}", &caps[1], &caps[2], &caps[3]));
    }
    let indent_len = line.len() - line.trim_start().len();
    let (indent, text) = line.split_at(indent_len);
    Some(format!("{indent}- [ ] {text}"))
}

/// Toggle the task under the cursor, as a single-line splice.
pub fn toggle_at(lines: &[String], cursor: Cursor) -> Option<DocumentEdit> {
    edit_line_at(lines, cursor, toggle_task, "not a checklist task")
}

/// Convert the line under the cursor into a task, as a single-line splice.
pub fn create_at(lines: &[String], cursor: Cursor) -> Option<DocumentEdit> {
    edit_line_at(lines, cursor, create_task, "cannot become a task")
}

fn edit_line_at(
    lines: &[String],
    cursor: Cursor,
    op: impl Fn(&str) -> Option<String>,
    why_not: &str,
) -> Option<DocumentEdit> {
    let Some(line) = lines.get(cursor.line) else {
        debug!(line = cursor.line, "cursor is outside the document");
        return None;
    };
    match op(line) {
        Some(replacement) => Some(DocumentEdit {
            start: cursor.line,
            deleted: 1,
            lines: vec![replacement],
            cursor: Some(cursor),
        }),
        None => {
            debug!(line = cursor.line, "skipping line: {why_not}");
            None
        }
    }
}

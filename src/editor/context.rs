//! The host-editor contract.

use tracing::trace;

/// Cursor position in a document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    /// Zero-based line index.
    pub line: usize,
    /// Zero-based column (byte offset within the line).
    pub col: usize,
}

impl Cursor {
    /// Create a cursor at a specific position.
    pub const fn at(line: usize, col: usize) -> Self {
        Self { line, col }
    }
}

/// A single replacement splice against a document.
///
/// Deletes `deleted` lines at `start`, inserts `lines` in their place, and
/// optionally moves the cursor. Every operation in this crate — table
/// transforms, task toggling, fence insertion — describes its effect as one
/// of these, so the host applies exactly one atomic buffer mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentEdit {
    /// Line index where the splice begins.
    pub start: usize,
    /// Number of lines removed at `start`.
    pub deleted: usize,
    /// Lines inserted at `start`.
    pub lines: Vec<String>,
    /// New cursor position, if the operation wants one.
    pub cursor: Option<Cursor>,
}

/// Narrow view of the host editor.
///
/// The core only ever reads a line snapshot and a cursor, and writes back a
/// splice and a cursor; it never touches host internals beyond this trait.
pub trait EditorContext {
    /// Snapshot of the document's lines.
    fn lines(&self) -> Vec<String>;

    /// Current cursor position.
    fn cursor(&self) -> Cursor;

    /// Delete `deleted` lines at `start` and insert `lines` there.
    fn replace_lines(&mut self, start: usize, deleted: usize, lines: &[String]);

    /// Move the cursor, clamping to the document.
    fn set_cursor(&mut self, cursor: Cursor);
}

/// Apply a splice to the host.
pub fn apply_edit(ctx: &mut dyn EditorContext, edit: &DocumentEdit) {
    trace!(
        start = edit.start,
        deleted = edit.deleted,
        inserted = edit.lines.len(),
        "applying document edit"
    );
    ctx.replace_lines(edit.start, edit.deleted, &edit.lines);
    if let Some(cursor) = edit.cursor {
        ctx.set_cursor(cursor);
    }
}

//! Rope-backed in-memory host editor.

use ropey::Rope;

use super::context::{Cursor, EditorContext};

/// An in-memory document implementing [`EditorContext`].
///
/// Backed by a rope so that line splices stay cheap on large documents.
/// Used by the CLI host and by integration tests; a real editor integration
/// would implement [`EditorContext`] against its own buffer instead.
pub struct MemoryEditor {
    rope: Rope,
    cursor: Cursor,
    dirty: bool,
}

impl MemoryEditor {
    /// Create a buffer from a string.
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            cursor: Cursor::default(),
            dirty: false,
        }
    }

    /// Create an empty buffer.
    pub fn empty() -> Self {
        Self::from_text("")
    }

    /// Whether the buffer has been modified since creation.
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Total number of lines in the buffer.
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Get the content of a line (without trailing newline).
    pub fn line_at(&self, line_idx: usize) -> Option<String> {
        if line_idx >= self.rope.len_lines() {
            return None;
        }
        let line = self.rope.line(line_idx).to_string();
        Some(
            line.trim_end_matches('\n')
                .trim_end_matches('\r')
                .to_string(),
        )
    }

    /// Length of a line in bytes (without trailing newline).
    pub fn line_len(&self, line_idx: usize) -> usize {
        self.line_at(line_idx).map_or(0, |s| s.len())
    }

    /// The full text content of the buffer.
    pub fn text(&self) -> String {
        self.rope.to_string()
    }
}

impl EditorContext for MemoryEditor {
    fn lines(&self) -> Vec<String> {
        (0..self.line_count())
            .filter_map(|idx| self.line_at(idx))
            .collect()
    }

    fn cursor(&self) -> Cursor {
        self.cursor
    }

    fn replace_lines(&mut self, start: usize, deleted: usize, lines: &[String]) {
        let total = self.rope.len_lines();
        let start = start.min(total);
        let end = start.saturating_add(deleted).min(total);

        let start_char = self.rope.line_to_char(start);
        let end_char = self.rope.line_to_char(end);
        self.rope.remove(start_char..end_char);

        if !lines.is_empty() {
            let mut text = lines.join("\n");
            text.push('\n');
            // Splicing past a final line that lacks its newline needs one.
            if start_char == self.rope.len_chars()
                && start_char > 0
                && self.rope.char(start_char - 1) != '\n'
            {
                text.insert(0, '\n');
            }
            self.rope.insert(start_char, &text);
        }
        self.dirty = true;
    }

    fn set_cursor(&mut self, cursor: Cursor) {
        let max_line = self.line_count().saturating_sub(1);
        let line = cursor.line.min(max_line);
        let col = cursor.col.min(self.line_len(line));
        self.cursor = Cursor::at(line, col);
    }
}

impl std::fmt::Debug for MemoryEditor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryEditor")
            .field(
                "rope",
                &format_args!("Rope({} lines)", self.rope.len_lines()),
            )
            .field("cursor", &self.cursor)
            .field("dirty", &self.dirty)
            .finish()
    }
}

//! Structural table mutations.
//!
//! All operations are total: out-of-range indexes clamp or no-op rather than
//! panic, and the boundary behavior of the swaps is part of the contract
//! (see the individual methods).

use super::model::{RowCursor, TableContent};

impl TableContent {
    /// Insert a blank column at `col`, shifting later columns right.
    ///
    /// `col` may equal the column count to append at the right edge.
    pub fn insert_column(&mut self, col: usize) {
        let rows = self.row_count();
        let col = col.min(self.columns.len());
        self.columns.insert(col, vec![String::new(); rows]);
    }

    /// Insert a blank data row directly after the referenced row.
    ///
    /// A [`RowCursor::Header`] target inserts the new row as the first data
    /// row.
    pub fn insert_row(&mut self, at: RowCursor) {
        let index = match at {
            RowCursor::Header => 1,
            RowCursor::Data(row) => row + 2,
        };
        let index = index.min(self.row_count());
        for column in &mut self.columns {
            column.insert(index, String::new());
        }
    }

    /// Exchange the column at `col` with its left neighbor.
    ///
    /// Boundary behavior: `col` equal to the column count (cursor past the
    /// final separator) moves the last column leftward; `col` of 0 or 1
    /// leaves the table unchanged.
    pub fn swap_column(&mut self, col: usize) {
        let count = self.columns.len();
        if col <= 1 || col > count {
            return;
        }
        let source = if col == count { col - 2 } else { col };
        let column = self.columns.remove(source);
        self.columns.insert(col - 1, column);
    }

    /// Move the data row at `row` down one place.
    ///
    /// The last data row swaps with its predecessor instead; a single data
    /// row has no predecessor and the table is left unchanged.
    pub fn swap_row(&mut self, row: usize) {
        let data_rows = self.data_row_count();
        if data_rows == 0 {
            return;
        }
        let row = row.min(data_rows - 1);
        if row + 1 == data_rows {
            if data_rows == 1 {
                return;
            }
            for column in &mut self.columns {
                let cell = column.remove(row + 1);
                column.insert(row, cell);
            }
        } else {
            for column in &mut self.columns {
                let cell = column.remove(row + 1);
                column.insert(row + 2, cell);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content(columns: &[&[&str]]) -> TableContent {
        TableContent::from_columns(
            columns
                .iter()
                .map(|col| col.iter().map(ToString::to_string).collect())
                .collect(),
        )
    }

    fn column(content: &TableContent, col: usize) -> Vec<&str> {
        content.columns()[col].iter().map(String::as_str).collect()
    }

    // --- insert_column ---

    #[test]
    fn test_insert_column_in_middle() {
        let mut c = content(&[&["a", "1"], &["b", "2"]]);
        c.insert_column(1);
        assert_eq!(c.column_count(), 3);
        assert_eq!(column(&c, 1), vec!["", ""]);
        assert_eq!(column(&c, 2), vec!["b", "2"]);
        assert!(c.is_rectangular());
    }

    #[test]
    fn test_insert_column_appends_at_column_count() {
        let mut c = content(&[&["a", "1"], &["b", "2"]]);
        c.insert_column(2);
        assert_eq!(column(&c, 2), vec!["", ""]);
    }

    #[test]
    fn test_insert_column_clamps_past_end() {
        let mut c = content(&[&["a", "1"]]);
        c.insert_column(9);
        assert_eq!(c.column_count(), 2);
    }

    #[test]
    fn test_insert_column_preserves_row_count() {
        let mut c = content(&[&["a", "1", "2"], &["b", "3", "4"]]);
        for col in 0..=c.column_count() {
            c.insert_column(col);
            assert_eq!(c.row_count(), 3);
        }
    }

    // --- insert_row ---

    #[test]
    fn test_insert_row_below_header() {
        let mut c = content(&[&["a", "1"], &["b", "2"]]);
        c.insert_row(RowCursor::Header);
        assert_eq!(column(&c, 0), vec!["a", "", "1"]);
    }

    #[test]
    fn test_insert_row_after_data_row() {
        let mut c = content(&[&["a", "1", "3"], &["b", "2", "4"]]);
        c.insert_row(RowCursor::Data(0));
        assert_eq!(column(&c, 0), vec!["a", "1", "", "3"]);
    }

    #[test]
    fn test_insert_row_after_last_data_row() {
        let mut c = content(&[&["a", "1"]]);
        c.insert_row(RowCursor::Data(0));
        assert_eq!(column(&c, 0), vec!["a", "1", ""]);
    }

    // --- swap_column ---

    #[test]
    fn test_swap_column_with_left_neighbor() {
        let mut c = content(&[&["a"], &["b"], &["c"]]);
        c.swap_column(2);
        assert_eq!(c.row(0).collect::<Vec<_>>(), vec!["a", "c", "b"]);
    }

    #[test]
    fn test_swap_column_at_count_moves_last_left() {
        let mut c = content(&[&["a"], &["b"], &["c"]]);
        c.swap_column(3);
        assert_eq!(c.row(0).collect::<Vec<_>>(), vec!["a", "c", "b"]);
    }

    #[test]
    fn test_swap_column_zero_and_one_are_noops() {
        let mut c = content(&[&["a"], &["b"]]);
        c.swap_column(0);
        assert_eq!(c.row(0).collect::<Vec<_>>(), vec!["a", "b"]);
        c.swap_column(1);
        assert_eq!(c.row(0).collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn test_swap_column_swaps_whole_columns() {
        let mut c = content(&[&["a", "1"], &["b", "2"], &["c", "3"]]);
        c.swap_column(2);
        assert_eq!(column(&c, 1), vec!["c", "3"]);
        assert_eq!(column(&c, 2), vec!["b", "2"]);
    }

    // --- swap_row ---

    #[test]
    fn test_swap_row_with_successor() {
        let mut c = content(&[&["h", "1", "2", "3"]]);
        c.swap_row(0);
        assert_eq!(column(&c, 0), vec!["h", "2", "1", "3"]);
    }

    #[test]
    fn test_swap_row_twice_restores_order() {
        let mut c = content(&[&["h", "1", "2", "3"]]);
        c.swap_row(0);
        c.swap_row(0);
        assert_eq!(column(&c, 0), vec!["h", "1", "2", "3"]);
    }

    #[test]
    fn test_swap_last_row_with_predecessor() {
        let mut c = content(&[&["h", "1", "2", "3"]]);
        c.swap_row(2);
        assert_eq!(column(&c, 0), vec!["h", "1", "3", "2"]);
    }

    #[test]
    fn test_swap_only_row_is_noop() {
        let mut c = content(&[&["h", "1"]]);
        c.swap_row(0);
        assert_eq!(column(&c, 0), vec!["h", "1"]);
        c.swap_row(0);
        assert_eq!(column(&c, 0), vec!["h", "1"]);
    }

    #[test]
    fn test_swap_row_without_data_is_noop() {
        let mut c = content(&[&["h"]]);
        c.swap_row(0);
        assert_eq!(column(&c, 0), vec!["h"]);
    }

    #[test]
    fn test_swap_row_clamps_out_of_range_index() {
        let mut c = content(&[&["h", "1", "2"]]);
        c.swap_row(9);
        assert_eq!(column(&c, 0), vec!["h", "2", "1"]);
    }

    // --- composition ---

    #[test]
    fn test_insert_column_then_row_stays_rectangular() {
        let mut c = content(&[&["a", "1"], &["b", "2"]]);
        c.insert_column(1);
        c.insert_row(RowCursor::Data(0));
        assert!(c.is_rectangular());
        assert_eq!(c.column_count(), 3);
        assert_eq!(c.row_count(), 3);

        let mut c = content(&[&["a", "1"], &["b", "2"]]);
        c.insert_row(RowCursor::Data(0));
        c.insert_column(1);
        assert!(c.is_rectangular());
        assert_eq!(c.column_count(), 3);
        assert_eq!(c.row_count(), 3);
    }
}

use markwright::config::EditorConfig;
use markwright::editor::{Cursor, EditorContext, MemoryEditor, apply_edit};
use markwright::table::{TableAction, TableError, transform};
use markwright::{fence, tasks};

fn editor(text: &str) -> MemoryEditor {
    MemoryEditor::from_text(text)
}

#[test]
fn test_add_column_end_to_end() {
    let mut ed = editor("# doc\n\n| a | b |\n|---|---|\n| 1 | 2 |\n\ntail\n");
    ed.set_cursor(Cursor::at(4, 2));

    let edit = transform(
        &ed.lines(),
        ed.cursor(),
        TableAction::AddColumn,
        &EditorConfig::default(),
    )
    .unwrap();
    apply_edit(&mut ed, &edit);

    assert_eq!(
        ed.text(),
        "# doc\n\n\
         | a     |       | b     |\n\
         |-------|-------|-------|\n\
         | 1     |       | 2     |\n\
         \ntail\n"
    );
}

#[test]
fn test_swap_row_keeps_surrounding_text() {
    let mut ed = editor("intro\n| h |\n|---|\n| 1 |\n| 2 |\noutro\n");
    ed.set_cursor(Cursor::at(3, 2));

    let edit = transform(
        &ed.lines(),
        ed.cursor(),
        TableAction::SwapRow,
        &EditorConfig::default(),
    )
    .unwrap();
    apply_edit(&mut ed, &edit);

    let lines = ed.lines();
    assert_eq!(lines[0], "intro");
    assert_eq!(lines[3], "| 2     |");
    assert_eq!(lines[4], "| 1     |");
    assert_eq!(lines[5], "outro");
}

#[test]
fn test_failed_transform_leaves_buffer_untouched() {
    let original = "no tables here\njust text\n";
    let mut ed = editor(original);
    ed.set_cursor(Cursor::at(0, 0));

    let result = transform(
        &ed.lines(),
        ed.cursor(),
        TableAction::AddRow,
        &EditorConfig::default(),
    );
    assert_eq!(result, Err(TableError::NotATable(0)));
    assert_eq!(ed.text(), original);
    assert!(!ed.is_dirty());
}

#[test]
fn test_malformed_table_leaves_buffer_untouched() {
    let original = "| a | b |\n|---|---|\n| 1 | 2 | 3 |\n";
    let mut ed = editor(original);
    ed.set_cursor(Cursor::at(2, 2));

    let result = transform(
        &ed.lines(),
        ed.cursor(),
        TableAction::SwapColumn,
        &EditorConfig::default(),
    );
    assert!(matches!(result, Err(TableError::Malformed(_))));
    assert_eq!(ed.text(), original);
}

#[test]
fn test_transform_normalizes_ragged_widths() {
    let mut ed = editor("| Name | Age |\n|--|--|\n| Bob |30|\n");
    ed.set_cursor(Cursor::at(2, 2));

    let edit = transform(
        &ed.lines(),
        ed.cursor(),
        TableAction::AddRow,
        &EditorConfig::default(),
    )
    .unwrap();
    apply_edit(&mut ed, &edit);

    assert_eq!(
        ed.text(),
        "| Name  | Age   |\n\
         |-------|-------|\n\
         | Bob   | 30    |\n\
         |       |       |\n"
    );
}

#[test]
fn test_toggle_task_through_context() {
    let mut ed = editor("# todo\n- [ ] milk\n- [x] eggs\n");
    ed.set_cursor(Cursor::at(2, 0));

    let edit = tasks::toggle_at(&ed.lines(), ed.cursor()).unwrap();
    apply_edit(&mut ed, &edit);

    assert_eq!(ed.text(), "# todo\n- [ ] milk\n- [ ] eggs\n");
}

#[test]
fn test_toggle_on_plain_line_is_a_noop() {
    let mut ed = editor("# todo\n");
    ed.set_cursor(Cursor::at(0, 0));
    assert_eq!(tasks::toggle_at(&ed.lines(), ed.cursor()), None);
    assert_eq!(ed.text(), "# todo\n");
}

#[test]
fn test_code_block_insertion_moves_cursor_inside() {
    let mut ed = editor("before\nafter\n");
    ed.set_cursor(Cursor::at(0, 3));

    let edit = fence::insert_fence(ed.cursor(), Some("rust"));
    apply_edit(&mut ed, &edit);

    assert_eq!(ed.text(), "before\n```rust\n\n```\nafter\n");
    assert_eq!(ed.cursor(), Cursor::at(2, 0));
}

#[test]
fn test_cursor_is_restored_into_the_new_table() {
    let mut ed = editor("| a | b |\n|---|---|\n| 1 | 2 |\n");
    ed.set_cursor(Cursor::at(2, 2));

    let edit = transform(
        &ed.lines(),
        ed.cursor(),
        TableAction::AddRow,
        &EditorConfig::default(),
    )
    .unwrap();
    apply_edit(&mut ed, &edit);

    let cursor = ed.cursor();
    assert_eq!(cursor.line, 2);
    assert!(cursor.col <= ed.line_len(cursor.line));
}

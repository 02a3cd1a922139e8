//! Aligned markdown serialization of table content.

use unicode_width::UnicodeWidthStr;

use super::model::TableContent;

/// Columns never render narrower than this, so short headers still produce
/// a readable table.
pub const MIN_COLUMN_WIDTH: usize = 5;

/// Cell justification within a rendered column.
#[derive(clap::ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Justify {
    #[default]
    Left,
    Right,
    Center,
}

/// Serialize table content into aligned, pipe-delimited markdown lines.
///
/// Emits the header row, the regenerated separator row, then the data rows
/// in order. Each column is padded to its width with single-space gutters
/// around the pipes; blank cells render as spaces so alignment holds.
pub fn render(content: &TableContent, justify: Justify) -> Vec<String> {
    let widths: Vec<usize> = content.columns().iter().map(|c| column_width(c)).collect();

    let mut lines = Vec::with_capacity(content.row_count() + 1);
    lines.push(render_row(content.row(0), &widths, justify));
    lines.push(render_separator(&widths));
    for row in 1..content.row_count() {
        lines.push(render_row(content.row(row), &widths, justify));
    }
    lines
}

/// Width of a column: the widest non-blank cell, floored at
/// [`MIN_COLUMN_WIDTH`]. Widths are measured as terminal display width.
fn column_width(cells: &[String]) -> usize {
    cells
        .iter()
        .map(|cell| cell.trim())
        .filter(|cell| !cell.is_empty())
        .map(UnicodeWidthStr::width)
        .max()
        .map_or(MIN_COLUMN_WIDTH, |widest| widest.max(MIN_COLUMN_WIDTH))
}

fn render_row<'a>(
    cells: impl Iterator<Item = &'a str>,
    widths: &[usize],
    justify: Justify,
) -> String {
    let mut out = String::from("|");
    for (cell, &width) in cells.zip(widths) {
        let pad = width.saturating_sub(cell.width());
        out.push(' ');
        match justify {
            Justify::Left => {
                out.push_str(cell);
                out.push_str(&" ".repeat(pad));
            }
            Justify::Right => {
                out.push_str(&" ".repeat(pad));
                out.push_str(cell);
            }
            Justify::Center => {
                let left = pad / 2;
                out.push_str(&" ".repeat(left));
                out.push_str(cell);
                out.push_str(&" ".repeat(pad - left));
            }
        }
        out.push(' ');
        out.push('|');
    }
    out.trim_end().to_string()
}

fn render_separator(widths: &[usize]) -> String {
    let mut out = String::from("|");
    for &width in widths {
        out.push_str(&"-".repeat(width + 2));
        out.push('|');
    }
    out
}

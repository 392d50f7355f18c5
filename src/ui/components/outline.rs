//! Outline component renderer.
//!
//! Renders the sidebar rows: indentation, disclosure marker, icon glyph, and
//! title. The cursor row is drawn with a full-width background; the row
//! currently shown in the detail pane keeps its own title color.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayRow;

/// Renders all outline rows starting at `row`.
///
/// # Returns
///
/// The next available row position (row + number of rows)
pub fn render_outline_rows(row: usize, col: usize, rows: &[DisplayRow], theme: &Theme, width: usize) -> usize {
    let mut current_row = row;
    for display_row in rows {
        current_row = render_outline_row(current_row, col, display_row, theme, width);
    }
    current_row
}

/// Renders a single outline row.
///
/// ```text
/// [indent]▸ ▣ Folder 1[padding to pane width]
/// ```
///
/// Colors are re-applied after each segment so the cursor background spans
/// the whole line.
fn render_outline_row(row: usize, col: usize, item: &DisplayRow, theme: &Theme, width: usize) -> usize {
    let base = if item.is_cursor {
        format!("{}{}", Theme::fg(&theme.colors.cursor_fg), Theme::bg(&theme.colors.cursor_bg))
    } else {
        Theme::fg(&theme.colors.text_normal)
    };
    let accent = |color: &str| if item.is_cursor { String::new() } else { Theme::fg(color) };

    position_cursor(row, col);
    print!("{base}");

    let indent = item.depth * 2;
    print!("{}", " ".repeat(indent));

    print!("{}{}{base} ", accent(&theme.colors.disclosure_fg), item.disclosure.marker());
    print!("{}{}{base} ", accent(&theme.colors.icon_fg), item.glyph);

    if item.is_selected {
        print!("{}{}", Theme::bold(), accent(&theme.colors.selected_fg));
    }
    print!("{}", item.title);

    print!("{}", " ".repeat(width.saturating_sub(item.line_width())));

    print!("{}", Theme::reset());
    row + 1
}

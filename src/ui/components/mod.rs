//! Composable UI component renderers.
//!
//! Each component draws one part of the interface at an explicit row and
//! column, so the same component serves both panes of the split layout.
//!
//! # Components
//!
//! - [`header`]: Pane title bar
//! - [`footer`]: Help text and keybinding hints
//! - [`outline`]: Sidebar rows with indentation, disclosure, and icons
//! - [`detail`]: Detail pane with the selected item's glyph and label
//! - [`empty`]: Empty state message for an empty outline
//!
//! # Layout Modes
//!
//! - [`render_split_mode`]: Sidebar │ Detail, sharing one footer
//! - [`render_single_mode`]: Whichever pane has focus, full width

mod detail;
mod empty;
mod footer;
mod header;
mod outline;

use crate::app::modes::PaneFocus;
use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use detail::render_detail;
use empty::render_empty_state;
use footer::render_footer;
use header::render_header;
use outline::render_outline_rows;

/// First row below the top blank line.
const FIRST_ROW: usize = 2;

/// Renders a horizontal border line of `width` columns at `row`, `col`.
///
/// # Returns
///
/// The next available row position (row + 1)
fn render_border(row: usize, col: usize, color: &str, width: usize) -> usize {
    position_cursor(row, col);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(width));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders a vertical separator in column `col` from `top` to `bottom` inclusive.
///
/// The ends join the horizontal borders with tee characters.
fn render_separator(top: usize, bottom: usize, col: usize, color: &str) {
    print!("{}", Theme::fg(color));
    for row in top..=bottom {
        position_cursor(row, col);
        let glyph = if row == top {
            "┬"
        } else if row == bottom {
            "┴"
        } else {
            "│"
        };
        print!("{glyph}");
    }
    print!("{}", Theme::reset());
}

/// Renders the sidebar pane (header, border, rows or empty state).
fn render_sidebar_pane(vm: &UIViewModel, theme: &Theme, col: usize, width: usize) -> usize {
    let mut current_row = FIRST_ROW;
    current_row = render_header(current_row, col, &vm.sidebar_header, theme, width);
    current_row = render_border(current_row, col, &theme.colors.border, width);

    if let Some(empty) = &vm.empty_state {
        render_empty_state(current_row + 3, col, empty, theme, width);
        return current_row;
    }

    render_outline_rows(current_row, col, &vm.rows, theme, width)
}

/// Renders the detail pane (header, border, content).
fn render_content_pane(vm: &UIViewModel, theme: &Theme, col: usize, width: usize, rows: usize) {
    let mut current_row = FIRST_ROW;
    current_row = render_header(current_row, col, &vm.content_header, theme, width);
    current_row = render_border(current_row, col, &theme.colors.border, width);

    let body_height = rows.saturating_sub(current_row + 2);
    render_detail(current_row, col, &vm.content, theme, width, body_height);
}

/// Renders the shared bottom border and footer.
fn render_bottom(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);

    render_border(border_row, 1, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);
}

/// Renders the two-pane layout.
///
/// ```text
/// [blank line]
/// [Sidebar header]  │ [Detail header]
/// [Border]──────────┬─[Border]
/// [Outline rows]    │ [Glyph]
///                   │ [Label]
/// [Border]──────────┴─[Border]
/// [Footer]
/// ```
pub fn render_split_mode(vm: &UIViewModel, theme: &Theme, sidebar_width: usize, cols: usize, rows: usize) {
    let separator_col = sidebar_width + 1;
    let content_col = separator_col + 1;
    let content_width = cols.saturating_sub(separator_col);

    render_sidebar_pane(vm, theme, 1, sidebar_width);
    render_content_pane(vm, theme, content_col, content_width, rows);
    render_bottom(vm, theme, cols, rows);

    position_cursor(FIRST_ROW, separator_col);
    print!("{}│{}", Theme::fg(&theme.colors.border), Theme::reset());
    render_separator(FIRST_ROW + 1, rows.saturating_sub(2), separator_col, &theme.colors.border);
}

/// Renders only the pane that has focus, using the full width.
pub fn render_single_mode(vm: &UIViewModel, theme: &Theme, focus: PaneFocus, cols: usize, rows: usize) {
    match focus {
        PaneFocus::Sidebar => {
            render_sidebar_pane(vm, theme, 1, cols);
        }
        PaneFocus::Content => render_content_pane(vm, theme, 1, cols, rows),
    }
    render_bottom(vm, theme, cols, rows);
}

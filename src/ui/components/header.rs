//! Header component renderer.
//!
//! Renders a pane title bar with centered text, theme-aware colors, and
//! optional background styling.

use crate::ui::helpers::{position_cursor, print_centered};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders a header title bar spanning `width` columns from `col`.
///
/// Displays the title centered with bold styling. If the width cannot be
/// split evenly, the right padding is slightly larger.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_header(row: usize, col: usize, header: &HeaderInfo, theme: &Theme, width: usize) -> usize {
    position_cursor(row, col);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }

    print_centered(&header.title, width);

    print!("{}", Theme::reset());
    row + 1
}

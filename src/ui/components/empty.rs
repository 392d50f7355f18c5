//! Empty state component renderer.
//!
//! Shown in the outline pane when the configured fixture has no items.

use crate::ui::helpers::{position_cursor, print_centered};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders a centered two-line message starting at `row`.
///
/// ```text
/// [left padding] MESSAGE [right padding]
/// [left padding] subtitle [right padding]
/// ```
///
/// The message uses the `empty_state_fg` theme color, and the subtitle uses
/// `text_dim` with dim styling.
pub fn render_empty_state(row: usize, col: usize, empty: &EmptyState, theme: &Theme, width: usize) {
    position_cursor(row, col);
    print!("{}", Theme::fg(&theme.colors.empty_state_fg));
    print_centered(&empty.message, width);
    print!("{}", Theme::reset());

    position_cursor(row + 1, col);
    print!("{}", Theme::dim());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print_centered(&empty.subtitle, width);
    print!("{}", Theme::reset());
}

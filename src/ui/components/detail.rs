//! Detail pane renderer.

use crate::app::content::ContentView;
use crate::ui::helpers::{position_cursor, print_centered};
use crate::ui::theme::Theme;

/// Renders the selected item's glyph above its label, both centered, with the
/// pair placed a third of the way down `height` rows starting at `row`.
pub fn render_detail(row: usize, col: usize, content: &ContentView, theme: &Theme, width: usize, height: usize) {
    let top = row + height / 3;

    position_cursor(top, col);
    print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.icon_fg));
    print_centered(content.glyph, width);
    print!("{}", Theme::reset());

    position_cursor(top + 2, col);
    print!("{}", Theme::fg(&theme.colors.detail_fg));
    print_centered(&content.text, width);
    print!("{}", Theme::reset());
}

//! View model types representing renderable UI state.
//!
//! View models are computed from application state via
//! `AppState::compute_viewmodel()` and consumed by the renderer. They contain no
//! business logic, only display-ready data: truncated titles, resolved glyphs,
//! indentation depth, and cursor/selection flags.
//!
//! # Example
//!
//! ```rust
//! use zoutline::ui::viewmodel::{Disclosure, DisplayRow};
//!
//! let row = DisplayRow {
//!     title: "Folder 1".to_string(),
//!     glyph: "▣",
//!     depth: 0,
//!     disclosure: Disclosure::Collapsed,
//!     is_cursor: true,
//!     is_selected: false,
//! };
//! assert_eq!(row.disclosure.marker(), "▸");
//! ```

use crate::app::content::ContentView;
use crate::app::modes::Layout;
use crate::ui::helpers::display_width;

/// Complete UI view model for rendering.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Pane arrangement for the current width.
    pub layout: Layout,

    /// Title bar above the outline.
    pub sidebar_header: HeaderInfo,

    /// Title bar above the detail pane.
    pub content_header: HeaderInfo,

    /// Visible window of outline rows.
    pub rows: Vec<DisplayRow>,

    /// Detail pane content.
    pub content: ContentView,

    /// Footer information (keybindings, help text).
    pub footer: FooterInfo,

    /// Shown in place of the outline when the forest is empty.
    pub empty_state: Option<EmptyState>,
}

/// Disclosure indicator state of a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disclosure {
    /// No children; no indicator.
    None,
    /// Has children, currently hidden.
    Collapsed,
    /// Has children, currently shown.
    Expanded,
}

impl Disclosure {
    /// Single-column marker drawn before the glyph.
    #[must_use]
    pub const fn marker(self) -> &'static str {
        match self {
            Self::None => " ",
            Self::Collapsed => "▸",
            Self::Expanded => "▾",
        }
    }
}

/// One line of the outline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    /// Title, already truncated to the pane width.
    pub title: String,

    /// Resolved icon glyph.
    pub glyph: &'static str,

    /// Nesting level, drawn as two columns of indentation each.
    pub depth: usize,

    pub disclosure: Disclosure,

    /// Whether the cursor is on this row.
    pub is_cursor: bool,

    /// Whether this row is the current selection shown in the detail pane.
    pub is_selected: bool,
}

impl DisplayRow {
    /// Columns the row occupies, title included.
    #[must_use]
    pub fn line_width(&self) -> usize {
        row_prefix_width(self.depth, self.glyph) + display_width(&self.title)
    }
}

/// Columns drawn before the title: indent, marker, space, glyph, space.
///
/// Circled numbers from 21 up are double-width, so the glyph is measured.
#[must_use]
pub fn row_prefix_width(depth: usize, glyph: &str) -> usize {
    depth * 2 + 2 + display_width(glyph) + 1
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Title text to display in the header.
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text.
    pub keybindings: String,
}

/// Empty state message display information.
#[derive(Debug, Clone)]
pub struct EmptyState {
    /// Primary message.
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(glyph: &'static str, depth: usize) -> DisplayRow {
        DisplayRow {
            title: "Leaf 21".to_string(),
            glyph,
            depth,
            disclosure: Disclosure::None,
            is_cursor: false,
            is_selected: false,
        }
    }

    #[test]
    fn wide_glyphs_take_two_columns() {
        assert_eq!(row("①", 0).line_width(), 11);
        assert_eq!(row("㉑", 0).line_width(), 12);
        assert_eq!(row("㊿", 1).line_width(), 14);
    }
}

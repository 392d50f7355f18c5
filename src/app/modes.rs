//! Pane focus and layout types.
//!
//! The plugin shows two panes side by side when the terminal is wide enough
//! ([`Layout::Split`]). On narrow terminals it collapses to a single pane
//! ([`Layout::Single`]) showing whichever pane has focus, the way a split view
//! collapses on a compact display.
//!
//! # Example
//!
//! ```rust
//! use zoutline::app::modes::{Layout, PaneFocus};
//!
//! assert_eq!(Layout::for_width(120, 80, PaneFocus::Content), Layout::Split { sidebar_width: 48 });
//! assert_eq!(Layout::for_width(60, 80, PaneFocus::Content), Layout::Single(PaneFocus::Content));
//! ```

/// Narrowest sidebar column in the split layout.
pub const MIN_SIDEBAR_WIDTH: usize = 24;

/// Which pane receives attention in the single-pane layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaneFocus {
    /// The outline list.
    #[default]
    Sidebar,

    /// The detail pane. Entered by selecting an item, left with `Back`.
    Content,
}

/// How the panes are arranged for a given terminal width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Sidebar on the left, content on the right, separated by one column.
    Split {
        /// Columns given to the sidebar, excluding the separator.
        sidebar_width: usize,
    },

    /// Only the focused pane is shown, using the full width.
    Single(PaneFocus),
}

impl Layout {
    /// Chooses the layout for `cols` columns.
    ///
    /// The sidebar takes two fifths of the width in the split layout, never less
    /// than [`MIN_SIDEBAR_WIDTH`].
    #[must_use]
    pub fn for_width(cols: usize, split_min_cols: usize, focus: PaneFocus) -> Self {
        if cols >= split_min_cols && cols > MIN_SIDEBAR_WIDTH * 2 {
            Self::Split {
                sidebar_width: (cols * 2 / 5).max(MIN_SIDEBAR_WIDTH),
            }
        } else {
            Self::Single(focus)
        }
    }

    #[must_use]
    pub const fn is_split(self) -> bool {
        matches!(self, Self::Split { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrow_terminals_collapse_to_focused_pane() {
        assert_eq!(Layout::for_width(79, 80, PaneFocus::Sidebar), Layout::Single(PaneFocus::Sidebar));
        assert_eq!(Layout::for_width(40, 0, PaneFocus::Content), Layout::Single(PaneFocus::Content));
    }

    #[test]
    fn sidebar_width_has_a_floor() {
        assert_eq!(Layout::for_width(50, 0, PaneFocus::Sidebar), Layout::Split { sidebar_width: 24 });
        assert!(Layout::for_width(200, 80, PaneFocus::Sidebar).is_split());
    }
}

//! Application state and view model computation.
//!
//! [`AppState`] wires the sidebar and content controllers together. On
//! construction it registers the sidebar's selection observer, which records the
//! selected identity in a shared slot; the detail pane is then rendered from that
//! slot by borrowing the node from the sidebar's snapshot.
//!
//! # Example
//!
//! ```rust
//! use zoutline::{AppState, ListItem, Sidebar, Theme};
//! use zoutline::domain::fixtures;
//!
//! let items = fixtures::folders(2, 3).child_items().to_vec();
//! let mut state = AppState::new(Sidebar::with_seed(items, 1), Theme::default());
//!
//! state.sidebar.select_at_cursor();
//! assert_eq!(state.selected_item().map(ListItem::title), Some("Folder 1"));
//!
//! let viewmodel = state.compute_viewmodel(24, 100).unwrap();
//! assert_eq!(viewmodel.content.text, "Selected item: Folder 1");
//! ```

use super::content::{ContentController, ContentView};
use super::modes::{Layout, PaneFocus};
use super::sidebar::Sidebar;
use crate::domain::error::Result;
use crate::domain::{icon, ItemId, ListItem};
use crate::outline::OutlineRow;
use crate::ui::helpers::truncate;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    row_prefix_width, Disclosure, DisplayRow, EmptyState, FooterInfo, HeaderInfo, UIViewModel,
};
use std::cell::Cell;
use std::rc::Rc;

/// Default minimum width for the two-pane layout.
pub const DEFAULT_SPLIT_MIN_COLS: usize = 80;

/// Rows taken by chrome: blank lines above and below, header, two borders, footer.
pub const CHROME_ROWS: usize = 6;

/// Central application state container.
#[derive(Debug)]
pub struct AppState {
    /// Outline controller owning the forest.
    pub sidebar: Sidebar,

    /// Detail pane renderer.
    pub content: ContentController,

    /// Identity last reported by the sidebar's selection observer.
    selection: Rc<Cell<Option<ItemId>>>,

    /// Pane shown when the layout collapses to a single pane.
    pub focus: PaneFocus,

    /// Color scheme for UI rendering.
    pub theme: Theme,

    /// Minimum width for the two-pane layout.
    pub split_min_cols: usize,

    /// Width seen at the last render, used to pick the layout while handling keys.
    pub viewport_cols: usize,
}

impl AppState {
    /// Creates the state and registers the selection observer on `sidebar`.
    #[must_use]
    pub fn new(mut sidebar: Sidebar, theme: Theme) -> Self {
        let selection = Rc::new(Cell::new(None));
        let slot = Rc::clone(&selection);

        sidebar.set_selection_observer(move |item| {
            let id = item.map(ListItem::id);
            tracing::debug!(
                selected = ?id,
                title = item.map_or("<none>", ListItem::title),
                "selection changed"
            );
            slot.set(id);
        });

        Self {
            sidebar,
            content: ContentController::new(),
            selection,
            focus: PaneFocus::default(),
            theme,
            split_min_cols: DEFAULT_SPLIT_MIN_COLS,
            viewport_cols: DEFAULT_SPLIT_MIN_COLS,
        }
    }

    /// The node currently shown in the detail pane, if any.
    #[must_use]
    pub fn selected_item(&self) -> Option<&ListItem> {
        self.selection
            .get()
            .and_then(|id| self.sidebar.item(id))
            .map(AsRef::as_ref)
    }

    /// Layout for the width seen at the last render.
    #[must_use]
    pub fn layout(&self) -> Layout {
        Layout::for_width(self.viewport_cols, self.split_min_cols, self.focus)
    }

    /// Renders the detail pane for the current selection.
    ///
    /// # Errors
    ///
    /// Returns an icon error if the selected node's icon key cannot be resolved.
    pub fn render_content(&self) -> Result<ContentView> {
        self.content.render(self.selected_item())
    }

    /// Computes a renderable view model for a `rows` × `cols` pane.
    ///
    /// The outline is windowed around the cursor: the cursor sits mid-window
    /// unless the window would run past either end of the list.
    ///
    /// # Errors
    ///
    /// Returns an icon error if any visible row or the selection has an icon key
    /// outside the built-in namespace.
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> Result<UIViewModel> {
        let _span = tracing::trace_span!("compute_viewmodel", rows, cols).entered();

        let layout = Layout::for_width(cols, self.split_min_cols, self.focus);
        let sidebar_width = match layout {
            Layout::Split { sidebar_width } => sidebar_width,
            Layout::Single(_) => cols,
        };

        let all_rows = self.sidebar.rows();
        let available_rows = rows.saturating_sub(CHROME_ROWS);
        let (start, end) = window(self.sidebar.cursor(), all_rows.len(), available_rows);

        let display_rows = all_rows[start..end]
            .iter()
            .enumerate()
            .filter_map(|(offset, row)| {
                self.compute_display_row(row, start + offset, sidebar_width)
                    .transpose()
            })
            .collect::<Result<Vec<_>>>()?;

        let empty_state = all_rows.is_empty().then(|| EmptyState {
            message: "No items".to_string(),
            subtitle: "Configure a fixture with at least one item".to_string(),
        });

        Ok(UIViewModel {
            layout,
            sidebar_header: self.compute_sidebar_header(),
            content_header: HeaderInfo {
                title: " Detail ".to_string(),
            },
            rows: display_rows,
            content: self.render_content()?,
            footer: self.compute_footer(layout),
            empty_state,
        })
    }

    fn compute_display_row(
        &self,
        row: &OutlineRow,
        index: usize,
        width: usize,
    ) -> Result<Option<DisplayRow>> {
        let Some(item) = self.sidebar.item(row.id) else {
            return Ok(None);
        };

        let disclosure = match (row.has_disclosure, row.is_expanded) {
            (false, _) => Disclosure::None,
            (true, false) => Disclosure::Collapsed,
            (true, true) => Disclosure::Expanded,
        };

        let glyph = icon::resolve(item.system_image())?;
        let title_width = width.saturating_sub(row_prefix_width(row.depth, glyph) + 1);

        Ok(Some(DisplayRow {
            title: truncate(item.title(), title_width),
            glyph,
            depth: row.depth,
            disclosure,
            is_cursor: index == self.sidebar.cursor(),
            is_selected: self.selection.get() == Some(row.id),
        }))
    }

    fn compute_sidebar_header(&self) -> HeaderInfo {
        let total = self.sidebar.content().map_or(0, |content| content.len());
        HeaderInfo {
            title: format!(" Outline ({total}) "),
        }
    }

    fn compute_footer(&self, layout: Layout) -> FooterInfo {
        let keybindings = match layout {
            Layout::Single(PaneFocus::Content) => "Esc/h: back  s: shuffle  q: quit",
            Layout::Single(PaneFocus::Sidebar) | Layout::Split { .. } => {
                "j/k: navigate  l/h: expand/collapse  Space: toggle  Enter: select  s: shuffle  q: quit"
            }
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }
}

/// Half-open range of rows to show so that `cursor` stays in view.
fn window(cursor: usize, len: usize, available: usize) -> (usize, usize) {
    let start = cursor
        .saturating_sub(available / 2)
        .min(len.saturating_sub(available));
    let end = (start + available).min(len);

    (start, end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fixtures;

    fn state(folders: usize, leaves: usize) -> AppState {
        let items = fixtures::folders(folders, leaves).child_items().to_vec();
        AppState::new(Sidebar::with_seed(items, 5), Theme::default())
    }

    #[test]
    fn window_centers_cursor() {
        assert_eq!(window(50, 100, 10), (45, 55));
        assert_eq!(window(2, 100, 10), (0, 10));
        assert_eq!(window(98, 100, 10), (90, 100));
        assert_eq!(window(1, 3, 10), (0, 3));
        assert_eq!(window(0, 0, 10), (0, 0));
        assert_eq!(window(7, 8, 10), (0, 8));
        assert_eq!(window(9, 12, 10), (2, 12));
    }

    #[test]
    fn short_outline_shows_every_row_with_cursor_at_bottom() {
        let items = fixtures::flat(8).child_items().to_vec();
        let mut state = AppState::new(Sidebar::with_seed(items, 0), Theme::default());
        state.sidebar.move_cursor_to_bottom();

        let Ok(vm) = state.compute_viewmodel(16, 120) else {
            panic!("viewmodel should compute");
        };

        let titles: Vec<&str> = vm.rows.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles.first().copied(), Some("Leaf 1"));
        assert_eq!(titles.len(), 8);
    }

    #[test]
    fn wide_glyph_rows_fit_the_pane() {
        let items = fixtures::flat(21).child_items().to_vec();
        let state = AppState::new(Sidebar::with_seed(items, 0), Theme::default());

        let Ok(vm) = state.compute_viewmodel(40, 11) else {
            panic!("viewmodel should compute");
        };

        let last = vm.rows.last();
        assert_eq!(last.map(|r| (r.glyph, r.title.as_str())), Some(("㉑", "Le...")));
        assert!(vm.rows.iter().all(|r| r.line_width() < 11));
    }

    #[test]
    fn observer_feeds_selection_slot() {
        let mut state = state(3, 2);
        assert!(state.selected_item().is_none());

        state.sidebar.move_cursor_down();
        state.sidebar.select_at_cursor();

        assert_eq!(state.selected_item().map(ListItem::title), Some("Folder 2"));
    }

    #[test]
    fn unknown_selection_clears_detail() {
        let mut state = state(1, 1);
        state.sidebar.select_at_cursor();
        state.sidebar.select(ItemId::new());

        assert!(state.selected_item().is_none());
        let view = state.render_content().ok();
        assert_eq!(view.map(|v| v.text), Some(crate::app::content::PLACEHOLDER_TEXT.to_string()));
    }

    #[test]
    fn viewmodel_marks_cursor_and_selection() {
        let mut state = state(3, 2);
        state.sidebar.move_cursor_down();
        state.sidebar.select_at_cursor();
        state.sidebar.move_cursor_down();

        let Ok(vm) = state.compute_viewmodel(24, 120) else {
            panic!("viewmodel should compute");
        };

        let flags: Vec<(bool, bool)> = vm.rows.iter().map(|r| (r.is_cursor, r.is_selected)).collect();
        assert_eq!(flags, [(false, false), (false, true), (true, false)]);
        assert!(vm.layout.is_split());
        assert_eq!(vm.sidebar_header.title, " Outline (9) ");
        assert!(vm.empty_state.is_none());
    }

    #[test]
    fn viewmodel_windows_long_outlines() {
        let items = fixtures::flat(1_000).child_items().to_vec();
        let mut state = AppState::new(Sidebar::with_seed(items, 0), Theme::default());
        state.sidebar.move_cursor_to_bottom();

        let Ok(vm) = state.compute_viewmodel(25, 120) else {
            panic!("viewmodel should compute");
        };

        assert_eq!(vm.rows.len(), 19);
        assert_eq!(vm.rows.last().map(|r| r.title.as_str()), Some("Leaf 1000"));
        assert!(vm.rows.last().is_some_and(|r| r.is_cursor));
    }

    #[test]
    fn expanded_rows_are_indented() {
        let mut state = state(1, 2);
        state.sidebar.expand_at_cursor();

        let Ok(vm) = state.compute_viewmodel(24, 120) else {
            panic!("viewmodel should compute");
        };

        let shape: Vec<(usize, Disclosure)> = vm.rows.iter().map(|r| (r.depth, r.disclosure)).collect();
        assert_eq!(shape, [(0, Disclosure::Expanded), (1, Disclosure::None), (1, Disclosure::None)]);
    }

    #[test]
    fn empty_forest_shows_empty_state() {
        let state = AppState::new(Sidebar::with_seed(Vec::new(), 0), Theme::default());

        let vm = state.compute_viewmodel(24, 120).ok();

        assert!(vm.is_some_and(|vm| vm.rows.is_empty() && vm.empty_state.is_some()));
    }

    #[test]
    fn narrow_viewmodel_collapses_to_focus() {
        let mut state = state(1, 1);
        state.focus = PaneFocus::Content;

        let vm = state.compute_viewmodel(24, 60).ok();

        assert_eq!(vm.map(|vm| vm.layout), Some(Layout::Single(PaneFocus::Content)));
    }
}

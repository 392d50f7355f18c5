//! Sidebar controller: owns the forest and drives the outline.
//!
//! The sidebar keeps the top-level sequence, re-projects it into an
//! [`OutlineSnapshot`] on every [`Sidebar::set_forest`], and resolves selections
//! against the full snapshot, so a node buried in a collapsed folder is found just
//! like a visible one. Selection changes are reported through a single-slot
//! observer.
//!
//! Cursor movement and expansion are terminal conveniences layered on top; they
//! never notify the observer. Only [`Sidebar::select`] and
//! [`Sidebar::select_at_cursor`] do, exactly once per call.

use crate::domain::{ItemId, ListItem};
use crate::outline::{self, OutlineRow, OutlineSnapshot, Section, SectionSnapshot};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::fmt;
use std::rc::Rc;

/// Callback invoked with the newly selected node, or `None`.
pub type SelectionObserver = Box<dyn FnMut(Option<&ListItem>)>;

/// Sidebar state and operations.
pub struct Sidebar {
    /// Top-level sequence in display order.
    items: Vec<Rc<ListItem>>,
    /// Current projection of `items`.
    outline: OutlineSnapshot,
    /// Visible rows of the main section, refreshed after every structural change.
    rows: Vec<OutlineRow>,
    /// Index into `rows`.
    cursor: usize,
    selected: Option<ItemId>,
    rng: StdRng,
    observer: Option<SelectionObserver>,
}

impl Sidebar {
    /// Creates a sidebar over `items` with an OS-seeded shuffle source.
    #[must_use]
    pub fn new(items: Vec<Rc<ListItem>>) -> Self {
        Self::with_rng(items, StdRng::from_os_rng())
    }

    /// Creates a sidebar whose shuffles are reproducible from `seed`.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::rc::Rc;
    /// use zoutline::{ListItem, Sidebar};
    ///
    /// let items: Vec<Rc<ListItem>> = (1..=5)
    ///     .map(|n| Rc::new(ListItem::leaf(format!("Leaf {n}"), format!("{n}.circle"))))
    ///     .collect();
    ///
    /// let mut a = Sidebar::with_seed(items.clone(), 7);
    /// let mut b = Sidebar::with_seed(items, 7);
    /// a.shuffle();
    /// b.shuffle();
    /// assert_eq!(a.items(), b.items());
    /// ```
    #[must_use]
    pub fn with_seed(items: Vec<Rc<ListItem>>, seed: u64) -> Self {
        Self::with_rng(items, StdRng::seed_from_u64(seed))
    }

    fn with_rng(items: Vec<Rc<ListItem>>, rng: StdRng) -> Self {
        let mut sidebar = Self {
            items: Vec::new(),
            outline: OutlineSnapshot::new(),
            rows: Vec::new(),
            cursor: 0,
            selected: None,
            rng,
            observer: None,
        };
        sidebar.set_forest(items);
        sidebar
    }

    /// Replaces the top-level sequence and re-projects it.
    ///
    /// The previous snapshot is reset first, so nothing from an earlier forest
    /// survives, including expansion state. The cursor is clamped to the new rows.
    /// The recorded selection is left alone; it only changes through selection.
    pub fn set_forest(&mut self, items: Vec<Rc<ListItem>>) {
        let _span = tracing::debug_span!("set_forest", roots = items.len()).entered();

        outline::reproject(&mut self.outline, Section::Main, &items);
        self.items = items;
        self.refresh_rows();

        tracing::debug!(
            visible_rows = self.rows.len(),
            total_items = self.content().map_or(0, SectionSnapshot::len),
            "forest applied"
        );
    }

    /// Randomly permutes the top-level sequence and re-applies it.
    ///
    /// Only root-level siblings move; every subtree keeps its internal order.
    pub fn shuffle(&mut self) {
        let mut items = self.items.clone();
        items.shuffle(&mut self.rng);
        tracing::debug!(roots = items.len(), "shuffled top-level items");
        self.set_forest(items);
    }

    /// Registers the selection observer, replacing any previous one.
    pub fn set_selection_observer(&mut self, observer: impl FnMut(Option<&ListItem>) + 'static) {
        self.observer = Some(Box::new(observer));
    }

    /// Resolves `id` against the whole forest and notifies the observer once.
    ///
    /// An unknown id degrades to "no selection". Returns the resolved node.
    pub fn select(&mut self, id: ItemId) -> Option<Rc<ListItem>> {
        let _span = tracing::debug_span!("select", %id).entered();

        let resolved = self.content().and_then(|content| content.item(id)).cloned();

        match &resolved {
            Some(item) => tracing::debug!(title = %item.title(), "item selected"),
            None => tracing::debug!("selection did not resolve, clearing"),
        }

        self.notify(resolved.as_deref());
        resolved
    }

    /// Selects the node under the cursor, or reports "no selection" if the
    /// outline is empty.
    pub fn select_at_cursor(&mut self) -> Option<Rc<ListItem>> {
        match self.cursor_row().map(|row| row.id) {
            Some(id) => self.select(id),
            None => {
                tracing::debug!("select requested on an empty outline");
                self.notify(None);
                None
            }
        }
    }

    fn notify(&mut self, item: Option<&ListItem>) {
        self.selected = item.map(ListItem::id);
        if let Some(observer) = self.observer.as_mut() {
            observer(item);
        }
    }

    #[must_use]
    pub fn items(&self) -> &[Rc<ListItem>] {
        &self.items
    }

    #[must_use]
    pub const fn outline(&self) -> &OutlineSnapshot {
        &self.outline
    }

    /// Content of the main section.
    #[must_use]
    pub fn content(&self) -> Option<&SectionSnapshot> {
        self.outline.section(Section::Main)
    }

    /// Rows currently visible, top to bottom.
    #[must_use]
    pub fn rows(&self) -> &[OutlineRow] {
        &self.rows
    }

    /// Looks a node up by identity within the current snapshot.
    #[must_use]
    pub fn item(&self, id: ItemId) -> Option<&Rc<ListItem>> {
        self.content().and_then(|content| content.item(id))
    }

    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn cursor_row(&self) -> Option<&OutlineRow> {
        self.rows.get(self.cursor)
    }

    #[must_use]
    pub const fn selected_id(&self) -> Option<ItemId> {
        self.selected
    }

    /// Moves the cursor down one row, wrapping to the top.
    pub fn move_cursor_down(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        self.cursor = (self.cursor + 1) % self.rows.len();
    }

    /// Moves the cursor up one row, wrapping to the bottom.
    pub fn move_cursor_up(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        if self.cursor == 0 {
            self.cursor = self.rows.len() - 1;
        } else {
            self.cursor -= 1;
        }
    }

    pub fn move_cursor_to_top(&mut self) {
        self.cursor = 0;
    }

    pub fn move_cursor_to_bottom(&mut self) {
        self.cursor = self.rows.len().saturating_sub(1);
    }

    /// Expands the node under the cursor. Returns whether anything changed.
    pub fn expand_at_cursor(&mut self) -> bool {
        let Some(id) = self.cursor_row().map(|row| row.id) else {
            return false;
        };
        let changed = self
            .outline
            .section_mut(Section::Main)
            .is_some_and(|content| content.expand(id));
        if changed {
            self.refresh_rows();
        }
        changed
    }

    /// Collapses the node under the cursor, or moves to its parent if it is
    /// already collapsed. Returns whether anything changed.
    pub fn collapse_at_cursor(&mut self) -> bool {
        let Some(id) = self.cursor_row().map(|row| row.id) else {
            return false;
        };

        let collapsed = self
            .outline
            .section_mut(Section::Main)
            .is_some_and(|content| content.collapse(id));
        if collapsed {
            self.refresh_rows();
            return true;
        }

        let parent = self.content().and_then(|content| content.parent_of(id));
        match parent.and_then(|parent| self.rows.iter().position(|row| row.id == parent)) {
            Some(position) => {
                self.cursor = position;
                true
            }
            None => false,
        }
    }

    /// Flips expansion of the node under the cursor.
    pub fn toggle_at_cursor(&mut self) -> bool {
        let Some(id) = self.cursor_row().map(|row| row.id) else {
            return false;
        };
        let changed = self
            .outline
            .section_mut(Section::Main)
            .is_some_and(|content| content.toggle(id));
        if changed {
            self.refresh_rows();
        }
        changed
    }

    /// Recomputes visible rows, keeping the cursor on the same node if possible.
    fn refresh_rows(&mut self) {
        let anchor = self.cursor_row().map(|row| row.id);

        self.rows = self
            .content()
            .map(|content| content.visible_rows().collect::<Vec<_>>())
            .unwrap_or_default();

        if let Some(position) = anchor.and_then(|id| self.rows.iter().position(|row| row.id == id)) {
            self.cursor = position;
        } else {
            self.cursor = self.cursor.min(self.rows.len().saturating_sub(1));
        }
    }
}

impl fmt::Debug for Sidebar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sidebar")
            .field("items", &self.items.len())
            .field("rows", &self.rows.len())
            .field("cursor", &self.cursor)
            .field("selected", &self.selected)
            .field("has_observer", &self.observer.is_some())
            .finish_non_exhaustive()
    }
}

//! Event handling and state transition logic.
//!
//! This module implements the event handler that translates user input into
//! state changes and action sequences. It is the only place where keys reach the
//! sidebar controller.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the plugin runtime
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via the sidebar and `AppState`
//! 4. Actions are collected and returned for execution
//!
//! # Event Types
//!
//! - **Navigation**: `KeyDown`, `KeyUp`, `Top`, `Bottom`
//! - **Outline**: `Expand`, `Collapse`, `ToggleExpand`, `Shuffle`
//! - **Selection**: `SelectItem`, `Back`
//! - **System**: `CloseFocus`
//!
//! When the layout has collapsed to the detail pane alone, outline keys are
//! ignored; `Back` (or `Collapse`) returns to the list.
//!
//! # Example
//!
//! ```rust
//! use zoutline::{handle_event, Action, AppState, Event, ListItem, Sidebar, Theme};
//! use std::rc::Rc;
//!
//! let items = vec![Rc::new(ListItem::leaf("Leaf 1", "1.circle"))];
//! let mut state = AppState::new(Sidebar::with_seed(items, 0), Theme::default());
//!
//! let (_, actions) = handle_event(&mut state, &Event::SelectItem)?;
//! assert_eq!(actions, vec![Action::RenamePane { title: "Leaf 1".to_string() }]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::app::modes::{Layout, PaneFocus};
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::ListItem;

/// Pane title used when nothing is selected.
pub const DEFAULT_PANE_TITLE: &str = "Zoutline";

/// Events triggered by user input.
///
/// Each event represents a discrete occurrence that may cause state changes
/// and action emissions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Moves the cursor down one row (wraps to top).
    KeyDown,
    /// Moves the cursor up one row (wraps to bottom).
    KeyUp,
    /// Jumps to the first row.
    Top,
    /// Jumps to the last row.
    Bottom,
    /// Expands the folder under the cursor.
    Expand,
    /// Collapses the folder under the cursor, or moves to its parent.
    Collapse,
    /// Flips expansion of the folder under the cursor.
    ToggleExpand,
    /// Selects the row under the cursor and shows it in the detail pane.
    SelectItem,
    /// Randomly reorders the top-level items.
    Shuffle,
    /// Returns from the detail pane to the outline in the single-pane layout.
    Back,
    /// Hides the plugin pane.
    CloseFocus,
}

impl Event {
    const fn moves_outline(self) -> bool {
        !matches!(self, Self::Shuffle | Self::Back | Self::CloseFocus)
    }
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// The boolean is `true` when the UI needs to be re-rendered.
///
/// # Errors
///
/// Currently infallible; the `Result` keeps the signature stable for handlers
/// that resolve icons or touch the filesystem.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    if state.layout() == Layout::Single(PaneFocus::Content) && event.moves_outline() {
        if *event == Event::Collapse {
            state.focus = PaneFocus::Sidebar;
            return Ok((true, vec![]));
        }
        tracing::debug!("detail pane focused, ignoring outline key");
        return Ok((false, vec![]));
    }

    match event {
        Event::KeyDown => {
            state.sidebar.move_cursor_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            state.sidebar.move_cursor_up();
            Ok((true, vec![]))
        }
        Event::Top => {
            state.sidebar.move_cursor_to_top();
            Ok((true, vec![]))
        }
        Event::Bottom => {
            state.sidebar.move_cursor_to_bottom();
            Ok((true, vec![]))
        }
        Event::Expand => Ok((state.sidebar.expand_at_cursor(), vec![])),
        Event::Collapse => Ok((state.sidebar.collapse_at_cursor(), vec![])),
        Event::ToggleExpand => Ok((state.sidebar.toggle_at_cursor(), vec![])),
        Event::SelectItem => {
            let selected = state.sidebar.select_at_cursor();
            let title = selected
                .as_deref()
                .map_or(DEFAULT_PANE_TITLE, ListItem::title)
                .to_string();

            tracing::debug!(title = %title, "item selected");

            if selected.is_some() {
                state.focus = PaneFocus::Content;
            }
            Ok((true, vec![Action::RenamePane { title }]))
        }
        Event::Shuffle => {
            state.sidebar.shuffle();
            Ok((true, vec![]))
        }
        Event::Back => {
            if state.focus == PaneFocus::Content {
                state.focus = PaneFocus::Sidebar;
                Ok((true, vec![]))
            } else {
                Ok((false, vec![]))
            }
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
    }
}

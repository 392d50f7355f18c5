//! Zellij plugin wrapper and entry point.
//!
//! This module provides the thin integration layer between the Zoutline library
//! and the Zellij plugin system. It implements the `ZellijPlugin` trait, maps
//! keys to library events, and executes the actions the handler returns.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, build the fixture and `AppState`
//! 2. **Subscribe**: Register for Key and `PermissionRequestResult` events
//! 3. **Update**: Handle events, delegate to library layer
//! 4. **Render**: Record the viewport width, call library render function
//!
//! # Keybindings
//!
//! - `j`/`Down`/`Ctrl+n`: Move down
//! - `k`/`Up`/`Ctrl+p`: Move up
//! - `g`/`G`: Jump to first/last row
//! - `l`/`Right`: Expand folder
//! - `h`/`Left`: Collapse folder (or back to the list from the detail pane)
//! - `Space`: Toggle folder
//! - `Enter`: Select item
//! - `s`: Shuffle top-level items
//! - `Esc`: Back to the list
//! - `q`: Close plugin

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use zoutline::{handle_event, Action, Config, Event};

register_plugin!(State);

/// Plugin state wrapper.
struct State {
    /// Core application state from library layer.
    app: zoutline::AppState,
}

impl Default for State {
    fn default() -> Self {
        let empty = Config {
            leaf_count: 0,
            ..Config::default()
        };
        Self {
            app: zoutline::initialize(&empty),
        }
    }
}

impl ZellijPlugin for State {
    /// Initializes the plugin on load.
    ///
    /// Requests `ChangeApplicationState` so the pane can be renamed and hidden.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        zoutline::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(
            fixture = ?config.fixture,
            size = ?config.fixture_size(),
            seed = ?config.shuffle_seed,
            "parsed configuration"
        );
        self.app = zoutline::initialize(&config);
        tracing::debug!("app state initialized");

        request_permission(&[PermissionType::ChangeApplicationState]);
        subscribe(&[EventType::Key, EventType::PermissionRequestResult]);

        tracing::debug!("plugin load complete");
    }

    /// Handles incoming Zellij events.
    ///
    /// Returns `true` if the UI should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span_name = format!("plugin_update::{event_name}");
        let span = tracing::debug_span!("plugin_update_event", otel.name = %span_name, event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match Self::map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::PermissionRequestResult(permissions) => {
                Self::handle_permission_result(permissions);
                return false;
            }
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for a in actions {
                    Self::execute_action(&a);
                }
                should_render
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
                false
            }
        }
    }

    /// Renders the plugin UI.
    ///
    /// # Panics
    ///
    /// Panics if an item carries an icon key outside the built-in namespace.
    /// Fixtures only use known keys, so this indicates a programming error.
    fn render(&mut self, rows: usize, cols: usize) {
        self.app.viewport_cols = cols;

        if let Err(e) = zoutline::ui::render(&self.app, rows, cols) {
            tracing::error!(error = %e, "render failed");
            panic!("{e}");
        }
    }
}

impl State {
    /// Gets a string name for a Zellij event for logging purposes.
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    /// Maps keyboard events to application events.
    fn map_key_event(key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, "key event");

        if key.bare_key == BareKey::Char('n') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::KeyDown);
        }
        if key.bare_key == BareKey::Char('p') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::KeyUp);
        }

        Some(match key.bare_key {
            BareKey::Down | BareKey::Char('j') => Event::KeyDown,
            BareKey::Up | BareKey::Char('k') => Event::KeyUp,
            BareKey::Char('g') => Event::Top,
            BareKey::Char('G') => Event::Bottom,
            BareKey::Right | BareKey::Char('l') => Event::Expand,
            BareKey::Left | BareKey::Char('h') => Event::Collapse,
            BareKey::Char(' ') => Event::ToggleExpand,
            BareKey::Enter => Event::SelectItem,
            BareKey::Char('s') => Event::Shuffle,
            BareKey::Esc => Event::Back,
            BareKey::Char('q') => Event::CloseFocus,
            _ => return None,
        })
    }

    /// Handles permission request results.
    fn handle_permission_result(permissions: PermissionStatus) {
        match permissions {
            PermissionStatus::Granted => {
                tracing::debug!("permissions granted");
            }
            PermissionStatus::Denied => {
                tracing::warn!("permissions denied - pane rename and hide unavailable");
            }
        }
    }

    /// Executes an action returned from event handling.
    ///
    /// Translates library actions to Zellij API calls.
    #[tracing::instrument(level = "debug")]
    fn execute_action(action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::RenamePane { ref title } => {
                let plugin_id = get_plugin_ids().plugin_id;
                tracing::debug!(plugin_id, title = %title, "renaming plugin pane");
                rename_plugin_pane(plugin_id, title);
            }
        }
    }
}

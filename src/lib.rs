//! Zoutline: a master-detail outline browser for Zellij.
//!
//! Zoutline renders a large, optionally nested list of items in a sidebar and a
//! detail pane for the selected item:
//! - Two panes side by side, collapsing to one on narrow terminals
//! - Expandable folders, drawn with disclosure markers and indentation
//! - Random reordering of the top-level items
//! - Synthetic fixtures of up to hundreds of thousands of items
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Event handling         - Sidebar controller      │
//! │  - Action dispatching     - Content controller      │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │
//! ┌───────────────┐   ┌───────────────────┐
//! │ UI Layer      │   │ Outline Layer     │
//! │ (ui/)         │   │ (outline/)        │
//! │ - Rendering   │   │ - Projection      │
//! │ - Theming     │   │ - Snapshots       │
//! │ - Components  │   │ - Visible rows    │
//! └───────────────┘   └───────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain Layer (domain/)                             │
//! │  - ListItem tree    - Icon namespace    - Fixtures  │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Data Flow
//!
//! 1. **Startup**: `Config::from_zellij` → `initialize` builds the fixture forest,
//!    projects it into the sidebar, and wires the selection observer.
//! 2. **Input**: keys become [`Event`]s; [`handle_event`] moves the cursor,
//!    expands folders, shuffles, or selects.
//! 3. **Selection**: the sidebar resolves the identity against the full snapshot
//!    and notifies the observer, which stores it in the app state.
//! 4. **Render**: the view model windows the visible rows around the cursor and
//!    asks the content controller for the detail pane.
//!
//! # Example
//!
//! ```rust
//! use zoutline::{handle_event, initialize, Config, Event};
//! use zoutline::domain::Fixture;
//!
//! let config = Config {
//!     fixture: Fixture::Folders,
//!     folder_count: 4,
//!     leaves_per_folder: 10,
//!     shuffle_seed: Some(42),
//!     ..Default::default()
//! };
//!
//! let mut state = initialize(&config);
//!
//! for event in [Event::KeyDown, Event::Expand, Event::KeyDown, Event::SelectItem] {
//!     let (_render, _actions) = handle_event(&mut state, &event)?;
//! }
//!
//! let view = state.render_content()?;
//! assert_eq!(view.text, "Selected item: Leaf 11");
//! # Ok::<(), zoutline::OutlineError>(())
//! ```
//!
//! # Platform Support
//!
//! - **Target**: `wasm32-wasip1` (Zellij WASM runtime)
//! - **Terminal**: Any ANSI-capable terminal emulator

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod outline;

pub mod ui;

pub mod observability;

pub use app::{
    handle_event, Action, AppState, ContentController, ContentView, Event, Layout, PaneFocus, Sidebar,
};
pub use domain::{Fixture, FixtureSize, ItemId, ListItem, OutlineError, Result};
pub use ui::Theme;

use app::state::DEFAULT_SPLIT_MIN_COLS;
use domain::fixtures::{DEFAULT_FOLDER_COUNT, DEFAULT_LEAF_COUNT, DEFAULT_LEAVES_PER_FOLDER};
use std::collections::BTreeMap;
use std::str::FromStr;

/// Plugin configuration parsed from Zellij's configuration system.
///
/// Configuration values are provided via Zellij's KDL layout configuration
/// and passed to the plugin during initialization.
///
/// # Example
///
/// ```kdl
/// plugin location="file:/path/to/zoutline.wasm" {
///     fixture "folders"
///     folder_count "4"
///     leaves_per_folder "25000"
///     shuffle_seed "7"
///     split_min_cols "100"
///     theme "catppuccin-mocha"
///     trace_level "debug"
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Which synthetic forest to show. Default: `flat`
    pub fixture: Fixture,

    /// Leaves in the flat fixture. Default: 100000
    pub leaf_count: usize,

    /// Folders in the folders fixture. Default: 4
    pub folder_count: usize,

    /// Leaves in each folder of the folders fixture. Default: 25000
    pub leaves_per_folder: usize,

    /// Seed for reproducible shuffles. OS-seeded when absent.
    pub shuffle_seed: Option<u64>,

    /// Minimum width for the two-pane layout. Default: 80
    pub split_min_cols: usize,

    /// Built-in theme name to use.
    ///
    /// Options: `catppuccin-mocha`, `catppuccin-latte`, `catppuccin-frappe`,
    /// `catppuccin-macchiato`. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. A leading `~` maps to the sandbox's `/host`.
    ///
    /// Takes precedence over `theme_name`. See [`ui::theme`] for format.
    pub theme_file: Option<String>,

    /// Tracing level for OpenTelemetry spans.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fixture: Fixture::default(),
            leaf_count: DEFAULT_LEAF_COUNT,
            folder_count: DEFAULT_FOLDER_COUNT,
            leaves_per_folder: DEFAULT_LEAVES_PER_FOLDER,
            shuffle_seed: None,
            split_min_cols: DEFAULT_SPLIT_MIN_COLS,
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Values that fail to parse fall back to their defaults; the failure is
    /// logged at debug level.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use zoutline::{Config, Fixture};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("fixture".to_string(), "folders".to_string());
    /// map.insert("leaves_per_folder".to_string(), "500".to_string());
    /// map.insert("leaf_count".to_string(), "lots".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.fixture, Fixture::Folders);
    /// assert_eq!(config.leaves_per_folder, 500);
    /// assert_eq!(config.leaf_count, 100_000);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();

        Self {
            fixture: parse_or(config, "fixture", defaults.fixture),
            leaf_count: parse_or(config, "leaf_count", defaults.leaf_count),
            folder_count: parse_or(config, "folder_count", defaults.folder_count),
            leaves_per_folder: parse_or(config, "leaves_per_folder", defaults.leaves_per_folder),
            shuffle_seed: config
                .get("shuffle_seed")
                .and_then(|raw| parse_value("shuffle_seed", raw)),
            split_min_cols: parse_or(config, "split_min_cols", defaults.split_min_cols),
            theme_name: config.get("theme").cloned(),
            theme_file: config.get("theme_file").cloned(),
            trace_level: config.get("trace_level").cloned(),
        }
    }

    /// Item counts for the configured fixture.
    #[must_use]
    pub const fn fixture_size(&self) -> FixtureSize {
        FixtureSize {
            leaf_count: self.leaf_count,
            folder_count: self.folder_count,
            leaves_per_folder: self.leaves_per_folder,
        }
    }

    /// Loads the configured theme, falling back to the default on any failure.
    #[must_use]
    pub fn load_theme(&self) -> Theme {
        if let Some(theme_file) = &self.theme_file {
            return Theme::from_file(infrastructure::expand_tilde(theme_file)).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            });
        }

        self.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
            Theme::from_name(theme_name).unwrap_or_else(|e| {
                tracing::debug!(theme_name = %theme_name, error = %e, "failed to load theme, using default");
                Theme::default()
            })
        })
    }
}

fn parse_value<T>(key: &str, raw: &str) -> Option<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match raw.trim().parse::<T>() {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::debug!(key = %key, value = %raw, error = %e, "invalid configuration value, using default");
            None
        }
    }
}

fn parse_or<T>(config: &BTreeMap<String, String>, key: &str, default: T) -> T
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    config
        .get(key)
        .and_then(|raw| parse_value(key, raw))
        .unwrap_or(default)
}

/// Initializes the plugin with configuration.
///
/// Loads the theme, builds the configured fixture, projects it into a sidebar
/// (seeded if `shuffle_seed` is set), and wires the sidebar's selection
/// observer into the returned state.
///
/// # Example
///
/// ```rust
/// use zoutline::{initialize, Config};
///
/// let config = Config { leaf_count: 10, ..Default::default() };
///
/// let state = initialize(&config);
/// assert_eq!(state.sidebar.rows().len(), 10);
/// assert!(state.selected_item().is_none());
/// ```
pub fn initialize(config: &Config) -> AppState {
    let _span = tracing::debug_span!("initialize", fixture = ?config.fixture).entered();
    tracing::debug!("initializing zoutline plugin");

    let theme = config.load_theme();
    let items = config.fixture.build(&config.fixture_size());

    let sidebar = match config.shuffle_seed {
        Some(seed) => Sidebar::with_seed(items, seed),
        None => Sidebar::new(items),
    };

    let mut state = AppState::new(sidebar, theme);
    state.split_min_cols = config.split_min_cols;
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn empty_map_gives_defaults() {
        let config = Config::from_zellij(&BTreeMap::new());

        assert_eq!(config.fixture, Fixture::Flat);
        assert_eq!(config.fixture_size(), FixtureSize::default());
        assert_eq!(config.shuffle_seed, None);
        assert_eq!(config.split_min_cols, 80);
        assert!(config.theme_name.is_none() && config.theme_file.is_none());
    }

    #[test]
    fn values_are_parsed_and_trimmed() {
        let config = Config::from_zellij(&map(&[
            ("fixture", " Folders "),
            ("folder_count", "3"),
            ("shuffle_seed", "99"),
            ("split_min_cols", " 120"),
            ("theme", "catppuccin-latte"),
            ("trace_level", "debug"),
        ]));

        assert_eq!(config.fixture, Fixture::Folders);
        assert_eq!(config.folder_count, 3);
        assert_eq!(config.shuffle_seed, Some(99));
        assert_eq!(config.split_min_cols, 120);
        assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
    }

    #[test]
    fn invalid_values_fall_back() {
        let config = Config::from_zellij(&map(&[
            ("fixture", "spiral"),
            ("leaf_count", "-5"),
            ("shuffle_seed", "soon"),
        ]));

        assert_eq!(config.fixture, Fixture::Flat);
        assert_eq!(config.leaf_count, DEFAULT_LEAF_COUNT);
        assert_eq!(config.shuffle_seed, None);
    }

    #[test]
    fn bad_theme_falls_back_to_default() {
        let config = Config {
            theme_name: Some("neon".to_string()),
            ..Default::default()
        };
        assert_eq!(config.load_theme().name, "catppuccin-mocha");

        let config = Config {
            theme_file: Some("/nonexistent/theme.toml".to_string()),
            theme_name: Some("catppuccin-latte".to_string()),
            ..Default::default()
        };
        assert_eq!(config.load_theme().name, "catppuccin-mocha");
    }

    #[test]
    fn initialize_applies_config() {
        let config = Config {
            fixture: Fixture::Folders,
            folder_count: 2,
            leaves_per_folder: 3,
            split_min_cols: 200,
            theme_name: Some("catppuccin-frappe".to_string()),
            ..Default::default()
        };

        let state = initialize(&config);

        assert_eq!(state.sidebar.rows().len(), 2);
        assert_eq!(state.sidebar.content().map(|c| c.len()), Some(8));
        assert_eq!(state.split_min_cols, 200);
        assert_eq!(state.theme.name, "catppuccin-frappe");
    }
}

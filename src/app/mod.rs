//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the plugin runtime (main.rs) and the domain and
//! outline layers.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Input → Events → Event Handler → Sidebar → Observer → Selection
//!                                          ↓                     ↓
//!                                       Actions          ContentController
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`content`]: Detail pane renderer
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: Pane focus and layout types
//! - [`sidebar`]: Outline controller owning the forest
//! - [`state`]: Central application state container and view model computation

pub mod actions;
pub mod content;
pub mod handler;
pub mod modes;
pub mod sidebar;
pub mod state;

pub use actions::Action;
pub use content::{ContentController, ContentView};
pub use handler::{handle_event, Event};
pub use modes::{Layout, PaneFocus};
pub use sidebar::{SelectionObserver, Sidebar};
pub use state::AppState;

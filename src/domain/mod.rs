//! Domain layer for the Zoutline plugin.
//!
//! This module contains the tree model and its supporting types, independent of
//! Zellij-specific APIs or rendering concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`item`]: `ListItem` tree nodes and pre-order traversal
//! - [`icon`]: Closed symbolic icon namespace
//! - [`fixtures`]: Synthetic forests used at startup
//!
//! # Examples
//!
//! ```
//! use zoutline::domain::{ListItem, Result};
//!
//! fn create_folder() -> Result<ListItem> {
//!     Ok(ListItem::create_folder(10, 1, 1))
//! }
//! ```

pub mod error;
pub mod fixtures;
pub mod icon;
pub mod item;

pub use error::{OutlineError, Result};
pub use fixtures::{Fixture, FixtureSize};
pub use item::{ItemId, ListItem};

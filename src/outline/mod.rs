//! Outline projection layer.
//!
//! Turns a forest of [`ListItem`](crate::domain::ListItem) roots into a
//! display-ready snapshot for the sidebar:
//!
//! ```text
//! forest ──project──▶ OutlineSnapshot ─┬─ sections
//!                                      └─ SectionSnapshot
//!                                           ├─ id → node
//!                                           ├─ roots (ordered)
//!                                           ├─ parent → children (ordered)
//!                                           └─ expansion state ──▶ visible rows
//! ```
//!
//! # Modules
//!
//! - [`snapshot`]: Snapshot types, expansion state, visible-row walk
//! - [`projector`]: Reset-and-repopulate projection of a forest

pub mod projector;
pub mod snapshot;

pub use projector::{project, project_section, reproject};
pub use snapshot::{OutlineRow, OutlineSnapshot, Section, SectionSnapshot};

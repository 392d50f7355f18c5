//! Infrastructure layer for filesystem and environment interactions.
//!
//! The Zellij plugin sandbox mounts the host filesystem under `/host`; paths
//! from configuration and the trace output location are resolved here.

pub mod paths;

pub use paths::{expand_tilde, get_data_dir, trace_file_path};

//! OpenTelemetry-based observability with file-based trace export.
//!
//! ```text
//! tracing-opentelemetry → OpenTelemetry SDK → FileSpanExporter → JSON Files
//! ```
//!
//! # Features
//!
//! - **File-Based Export**: Traces written to `~/.local/share/zellij/zoutline/zoutline-otlp.json`
//! - **Automatic Rotation**: Files rotate at 10MB with 3-backup retention
//! - **OTLP Format**: Standard OpenTelemetry Protocol JSON format
//!
//! The filter comes from the `trace_level` plugin option (default `"info"`).
//!
//! # Usage
//!
//! ```rust,no_run
//! use zoutline::observability::init_tracing;
//! use zoutline::Config;
//!
//! init_tracing(&Config::default());
//! tracing::debug!("plugin initialized");
//! ```

mod exporter;
mod file_writer;
mod init;

pub use init::init_tracing;

//! Error types for the Zoutline plugin.
//!
//! This module defines the centralized error type [`OutlineError`] and a type alias
//! [`Result`] for convenient error handling throughout the plugin. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! Lookup misses (selecting an id that is not in the forest) are deliberately not
//! represented here: they resolve to "no selection" and never surface as errors.

use thiserror::Error;

/// The main error type for Zoutline plugin operations.
///
/// # Examples
///
/// ```
/// use zoutline::OutlineError;
///
/// fn validate_config() -> Result<(), OutlineError> {
///     Err(OutlineError::Config("leaf_count must be a number".to_string()))
/// }
///
/// assert!(validate_config().is_err());
/// ```
#[derive(Debug, Error)]
pub enum OutlineError {
    /// An icon key has no glyph in the built-in icon namespace.
    ///
    /// The icon set is fixed at build time, so this can only come from a coding
    /// mistake. The plugin shim treats it as fatal.
    #[error("Icon error: no glyph for icon key `{0}`")]
    Icon(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically converts
    /// from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid or missing.
    ///
    /// The string describes the specific configuration problem.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for Zoutline operations.
///
/// # Examples
///
/// ```
/// use zoutline::Result;
///
/// fn project_forest() -> Result<()> {
///     Ok(())
/// }
/// ```
pub type Result<T> = std::result::Result<T, OutlineError>;

//! Path utilities for the Zellij sandbox environment.
//!
//! In the sandbox `/host` points to the cwd of the last focused terminal, or the
//! folder where Zellij was started. That is usually the user's home directory,
//! so `~` is mapped onto it.

use std::path::PathBuf;

/// File name of the OTLP trace output.
pub const TRACE_FILE_NAME: &str = "zoutline-otlp.json";

/// Returns the data directory for Zoutline output.
///
/// ```
/// use zoutline::infrastructure::get_data_dir;
///
/// assert_eq!(get_data_dir().to_str(), Some("/host/.local/share/zellij/zoutline"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("zoutline")
}

/// Location of the trace file inside [`get_data_dir`].
#[must_use]
pub fn trace_file_path() -> PathBuf {
    get_data_dir().join(TRACE_FILE_NAME)
}

/// Expands tilde paths to use the `/host` prefix for Zellij sandbox.
///
/// # Examples
///
/// ```
/// use zoutline::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/dusk.toml"), "/host/themes/dusk.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', "/host", 1)
    } else if path == "~" {
        "/host".to_string()
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tilde_only_expands_at_start() {
        assert_eq!(expand_tilde("themes/~/x.toml"), "themes/~/x.toml");
        assert_eq!(expand_tilde("~user/x"), "~user/x");
    }

    #[test]
    fn trace_file_lives_in_data_dir() {
        assert_eq!(trace_file_path().parent(), Some(get_data_dir().as_path()));
        assert!(trace_file_path().ends_with(TRACE_FILE_NAME));
    }
}

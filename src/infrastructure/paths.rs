//! Path helpers for the Zellij sandbox environment.

use std::path::PathBuf;

/// File name of the OTLP trace log inside the data directory.
pub const TRACE_FILE_NAME: &str = "thriftflip-otlp.json";

/// Returns the data directory for ThriftFlip.
///
/// In Zellij's plugin environment `/host` points to the cwd of the last
/// focused terminal, which is usually the user's home directory, so this
/// typically resolves to `~/.local/share/zellij/thriftflip`.
///
/// # Examples
///
/// ```
/// use thriftflip::infrastructure::get_data_dir;
///
/// let data_dir = get_data_dir();
/// assert_eq!(data_dir.to_str().unwrap(), "/host/.local/share/zellij/thriftflip");
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("thriftflip")
}

/// Full path of the trace log.
#[must_use]
pub fn trace_file_path() -> PathBuf {
    get_data_dir().join(TRACE_FILE_NAME)
}

/// Expands tilde paths to use the `/host` prefix for the Zellij sandbox.
///
/// Used for user-supplied paths such as `theme_file`.
///
/// # Examples
///
/// ```
/// use thriftflip::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/mine.toml"), "/host/themes/mine.toml");
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

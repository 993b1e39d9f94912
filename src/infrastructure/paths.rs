//! Paths inside the Zellij plugin sandbox.
//!
//! Zellij mounts a per-plugin data directory at `/data` and the host
//! filesystem, rooted at the directory Zellij was started from, at `/host`.

use std::path::PathBuf;

/// Name of the trace export file inside [`get_data_dir`].
pub const TRACE_FILE_NAME: &str = "pixzel-otlp.json";

/// The plugin's private data directory.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/data")
}

/// Full path of the trace export file.
#[must_use]
pub fn trace_file() -> PathBuf {
    get_data_dir().join(TRACE_FILE_NAME)
}

/// Maps a user-supplied path to its location in the sandbox.
///
/// `~` and `~/...` resolve under `/host`; anything else is returned as is.
///
/// ```
/// use pixzel::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/dusk.toml"), "/host/themes/dusk.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/etc/theme.toml"), "/etc/theme.toml");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    match path.strip_prefix('~') {
        Some("") => "/host".to_string(),
        Some(rest) if rest.starts_with('/') => format!("/host{rest}"),
        _ => path.to_string(),
    }
}

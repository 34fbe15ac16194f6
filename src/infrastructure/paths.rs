//! Path manipulation utilities for Zellij sandbox environment.
//!
//! In Zellij's plugin environment, `/host` points to the cwd of the last
//! focused terminal, or the folder where Zellij was started if that's not
//! available. This is typically the user's home directory.

use std::path::PathBuf;

/// Returns the data directory of the names panel.
///
/// Located at `/host/.local/share/zellij/names-panel`. Trace exports are
/// written there.
///
/// # Examples
///
/// ```
/// use names_panel::infrastructure::get_data_dir;
///
/// let data_dir = get_data_dir();
/// assert_eq!(data_dir.to_str().unwrap(), "/host/.local/share/zellij/names-panel");
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("names-panel")
}

/// Expands tilde paths to use the `/host` prefix for Zellij sandbox.
///
/// Used for user-supplied paths such as `theme_file`.
///
/// # Examples
///
/// ```
/// use names_panel::infrastructure::expand_tilde;
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

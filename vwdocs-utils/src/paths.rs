//! Path utilities for vwdocs
//!
//! Handles XDG Base Directory placement for the optional log file.

use std::path::PathBuf;

use directories::ProjectDirs;

/// Application identifier for XDG directories
const APP_NAME: &str = "vwdocs";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", APP_NAME)
}

/// Get the state directory (log files live here)
///
/// Location: `$XDG_STATE_HOME/vwdocs` or `~/.local/state/vwdocs`
pub fn state_dir() -> PathBuf {
    project_dirs()
        .and_then(|p| p.state_dir().map(|d| d.to_path_buf()))
        .unwrap_or_else(fallback_state_dir)
}

/// Get the log directory
///
/// Location: `$XDG_STATE_HOME/vwdocs/log`
pub fn log_dir() -> PathBuf {
    state_dir().join("log")
}

fn fallback_state_dir() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(".local/state")
        .join(APP_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_dir_is_under_state_dir() {
        let log = log_dir();
        assert!(log.starts_with(state_dir()));
        assert!(log.ends_with("log"));
    }

    #[test]
    fn test_state_dir_names_the_app() {
        let state = state_dir();
        assert!(state.to_string_lossy().contains(APP_NAME));
    }
}

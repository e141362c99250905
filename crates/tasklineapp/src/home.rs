//! Home directory discovery and `~` expansion.
//!
//! The config file lives directly under the user's home directory and
//! `tasklineDirectory` may be written relative to it with a leading `~`.

use crate::error::{Result, TasklineError};
use directories::BaseDirs;
use std::path::{Path, PathBuf};

/// Resolve the current user's home directory.
pub fn home_dir() -> Result<PathBuf> {
    BaseDirs::new()
        .map(|bd| bd.home_dir().to_path_buf())
        .ok_or(TasklineError::NoHomeDirectory)
}

/// Expand a leading `~` against `home`.
///
/// `~` alone maps to `home`, `~/tasks` and `~tasks` both map to `home/tasks`.
/// Paths without a leading `~` are returned unchanged, so expanding twice is a no-op.
/// Fails with [`TasklineError::NonUtf8Path`] when the expanded path is not valid UTF-8.
pub fn expand_tilde(path: &str, home: &Path) -> Result<String> {
    let Some(rest) = path.strip_prefix('~') else {
        return Ok(path.to_string());
    };
    let rest = rest.trim_start_matches(|c: char| c == '/' || c == '\\');
    let expanded = if rest.is_empty() {
        home.to_path_buf()
    } else {
        home.join(rest)
    };
    expanded
        .into_os_string()
        .into_string()
        .map_err(|_| TasklineError::NonUtf8Path(home.to_path_buf()))
}

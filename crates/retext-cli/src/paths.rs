//! Centralised retext user-directory resolution.
//!
//! When `RETEXT_HOME` is set, it replaces **all** platform-native user
//! directories (config, data).
//!
//! Priority for the user-level base directory:
//!   1. `RETEXT_HOME` env var (if set and non-empty)
//!   2. platform default via `dirs`
//!
//! For the history slot, an additional override applies on top:
//!   1. `RETEXT_HISTORY_PATH` env var  (highest priority)
//!   2. `RETEXT_HOME`                  (if set)
//!   3. `dirs::data_local_dir().map(|d| d.join("retext"))`

use std::path::PathBuf;

/// File name of the persisted history slot. Versioned so a future format
/// change can migrate by writing a new slot alongside the old one.
pub const HISTORY_SLOT_FILE: &str = "history.v1.json";

/// Shared resolution logic: return the `RETEXT_HOME` path when set and
/// non-empty, otherwise fall through to the platform-native `dirs_fallback`.
fn resolve_user_path(dirs_fallback: Option<PathBuf>) -> Option<PathBuf> {
    if let Ok(home) = std::env::var("RETEXT_HOME")
        && !home.is_empty()
    {
        return Some(PathBuf::from(home));
    }
    dirs_fallback
}

/// Returns the retext user-level base directory for config files.
///
/// When `RETEXT_HOME` is set (and non-empty), returns that path directly.
/// Otherwise returns `dirs::config_dir().map(|d| d.join("retext"))`.
pub fn user_dir() -> Option<PathBuf> {
    resolve_user_path(dirs::config_dir().map(|d| d.join("retext")))
}

/// Returns the base directory for data files (the history slot).
///
/// When `RETEXT_HOME` is set, identical to `user_dir()`.
/// Otherwise falls back to `dirs::data_local_dir().map(|d| d.join("retext"))`.
pub fn user_data_dir() -> Option<PathBuf> {
    resolve_user_path(dirs::data_local_dir().map(|d| d.join("retext")))
}

/// Returns the path of the persisted history slot: `RETEXT_HISTORY_PATH`
/// overrides; else `user_data_dir()/history.v1.json`.
pub fn history_path() -> Option<PathBuf> {
    if let Ok(p) = std::env::var("RETEXT_HISTORY_PATH")
        && !p.is_empty()
    {
        return Some(PathBuf::from(p));
    }
    user_data_dir().map(|d| d.join(HISTORY_SLOT_FILE))
}

/// Returns the path of the user config file: `user_dir()/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    user_dir().map(|d| d.join("config.toml"))
}

//! Centralized configuration paths for declutter
//!
//! All config files live under:
//! - Unix/macOS: `~/.config/declutter/`
//! - Windows: `%APPDATA%\declutter\`
//!
//! This module is the single source of truth for config paths.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use crate::settings::StorageError;

const APP_DIR: &str = "declutter";

/// Base config directory for declutter
///
/// Unix/macOS:
///   - If XDG_CONFIG_HOME is set: `$XDG_CONFIG_HOME/declutter`
///   - Else: `~/.config/declutter`
///
/// Windows:
///   - `%APPDATA%\declutter`
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_DIR))
    }

    #[cfg(not(target_os = "windows"))]
    {
        env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .map(|config| config.join(APP_DIR))
    }
}

/// `~/.config/declutter/declutter-settings.json`
pub fn settings_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(format!("{}.json", crate::settings::STORE_KEY)))
}

/// `~/.config/declutter/logs/`
pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

fn ensure_dir(path: &Path) -> Result<(), StorageError> {
    fs::create_dir_all(path).map_err(|source| StorageError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Ensure logs dir exists, returning it
pub fn ensure_logs_dir() -> Result<PathBuf, StorageError> {
    let logs = logs_dir().ok_or(StorageError::NoConfigDir)?;
    ensure_dir(&logs)?;
    Ok(logs)
}

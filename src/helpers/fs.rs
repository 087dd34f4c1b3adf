//! File System Utilities
//!
//! Configuration and data directory management.

use crate::constants::SETTINGS_FILE;
use crate::error::{Error, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("me", "bestial", "landing").ok_or_else(|| Error::Invalid {
        message: "Could not determine project directories".to_string(),
    })
}

fn ensure_dir(dir: &Path) -> Result<PathBuf> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(dir.to_path_buf())
}

/// Get or create the application's configuration directory
///
/// Platform-specific locations:
/// - **Linux**: `~/.config/landing/` or `$XDG_CONFIG_HOME/landing/`
/// - **macOS**: `~/Library/Application Support/me.bestial.landing/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\bestial\landing\config\`
pub fn get_or_create_config_dir() -> Result<PathBuf> {
    ensure_dir(project_dirs()?.config_dir())
}

/// Get or create the data directory, where log files go
///
/// Platform-specific locations:
/// - **Linux**: `~/.local/share/landing/`
/// - **macOS**: `~/Library/Application Support/me.bestial.landing/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\bestial\landing\data\`
pub fn get_or_create_data_dir() -> Result<PathBuf> {
    ensure_dir(project_dirs()?.data_dir())
}

/// Path of the settings file, created empty on first use
pub fn settings_path() -> Result<PathBuf> {
    let path = get_or_create_config_dir()?.join(SETTINGS_FILE);
    if !path.exists() {
        fs::write(&path, "")?;
    }
    Ok(path)
}

/// Check if running in development mode
pub fn is_development() -> bool {
    cfg!(debug_assertions)
}

//! Cross-Platform Path Utilities
//!
//! Functions for resolving the application's config directory.

use std::path::{Path, PathBuf};

use crate::utils::error::{AppError, AppResult};

/// Get the Argus directory (~/.argus/)
pub fn argus_dir() -> AppResult<PathBuf> {
    let home =
        dirs::home_dir().ok_or_else(|| AppError::config("Could not determine home directory"))?;
    Ok(home.join(".argus"))
}

/// Get the config file path (~/.argus/config.json)
pub fn config_path() -> AppResult<PathBuf> {
    Ok(argus_dir()?.join("config.json"))
}

/// Ensure a directory exists, creating it if necessary
pub fn ensure_dir(path: &Path) -> AppResult<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Get the Argus directory, creating if it doesn't exist
pub fn ensure_argus_dir() -> AppResult<PathBuf> {
    let path = argus_dir()?;
    ensure_dir(&path)?;
    Ok(path)
}

//! Path management for cine configuration, storage and logs.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/cine/              # Config directory (platform config dir + "cine")
//! ├── config.toml              # Client configuration
//! ├── local_storage.json       # Persistent key-value store (session record)
//! └── logs/                    # Application logs
//!     └── cine.log.YYYY-MM-DD
//! ```

use std::path::PathBuf;

const APP_DIR: &str = "cine";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Platform config directory could not be determined.
    ConfigDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find config directory"),
        }
    }
}

impl std::error::Error for PathError {}

impl From<PathError> for cine_core::CineError {
    fn from(err: PathError) -> Self {
        cine_core::CineError::config(err.to_string())
    }
}

/// Resolves every file the client reads or writes.
///
/// `root` overrides the platform config directory (tests, portable installs).
#[derive(Debug, Clone, Default)]
pub struct CinePaths {
    root: Option<PathBuf>,
}

impl CinePaths {
    pub fn new(root: Option<PathBuf>) -> Self {
        Self { root }
    }

    /// Returns the cine configuration directory.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: The override root, or e.g. `~/.config/cine/`
    /// - `Err(PathError::ConfigDirNotFound)`: Could not determine directory
    pub fn config_dir(&self) -> Result<PathBuf, PathError> {
        if let Some(root) = &self.root {
            return Ok(root.clone());
        }
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or(PathError::ConfigDirNotFound)
    }

    pub fn config_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join("config.toml"))
    }

    /// The JSON file backing the persistent key-value store.
    pub fn storage_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join("local_storage.json"))
    }

    pub fn logs_dir(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join("logs"))
    }
}

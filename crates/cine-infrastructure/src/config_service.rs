//! Configuration service implementation.
//!
//! Loads the client configuration from `config.toml` (see [`CinePaths`]),
//! writing the defaults out on first run, and applies the `CINE_API_URL`
//! environment override.

use crate::paths::CinePaths;
use crate::storage::{AtomicFile, FileFormat};
use cine_core::Result;
use cine_core::config::ClientConfig;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

/// Environment variable overriding `api.base_url`.
pub const API_URL_ENV: &str = "CINE_API_URL";

/// Configuration service that loads and caches the client configuration.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: PathBuf,
    /// Cached configuration loaded from file.
    config: Arc<RwLock<Option<ClientConfig>>>,
}

impl ConfigService {
    /// Creates a service reading `config.toml` from the resolved config directory.
    pub fn new(paths: &CinePaths) -> Result<Self> {
        Ok(Self::with_path(paths.config_file()?))
    }

    /// Creates a service reading an explicit configuration file.
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            path,
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Gets the configuration, loading from file if not cached.
    ///
    /// An unreadable file is logged and replaced by defaults for this run; the
    /// file itself is left untouched so the user can fix it.
    pub fn get_config(&self) -> ClientConfig {
        {
            let read_lock = self.config.read().unwrap_or_else(|e| e.into_inner());
            if let Some(ref cached) = *read_lock {
                return cached.clone();
            }
        }

        let loaded = match self.load_config() {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(
                    "[Config] Using defaults, failed to load {}: {}",
                    self.path.display(),
                    e
                );
                ClientConfig::default()
            }
        };
        let loaded = apply_api_url_override(loaded, std::env::var(API_URL_ENV).ok());

        {
            let mut write_lock = self.config.write().unwrap_or_else(|e| e.into_inner());
            *write_lock = Some(loaded.clone());
        }

        loaded
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        let mut write_lock = self.config.write().unwrap_or_else(|e| e.into_inner());
        *write_lock = None;
    }

    /// Loads the file, creating it with defaults if missing.
    fn load_config(&self) -> Result<ClientConfig> {
        let file: AtomicFile<ClientConfig> = AtomicFile::new(self.path.clone(), FileFormat::Toml);
        match file.load()? {
            Some(config) => Ok(config),
            None => {
                let default_config = ClientConfig::default();
                file.save(&default_config)?;
                tracing::info!("[Config] Wrote default config to {}", self.path.display());
                Ok(default_config)
            }
        }
    }
}

/// Replaces the base URL when an override is set and non-blank. Trailing
/// slashes are dropped so paths can be appended directly.
pub fn apply_api_url_override(mut config: ClientConfig, api_url: Option<String>) -> ClientConfig {
    if let Some(url) = api_url.filter(|url| !url.trim().is_empty()) {
        config.api.base_url = url.trim().to_string();
    }
    config.api.base_url = config.api.base_url.trim_end_matches('/').to_string();
    config
}

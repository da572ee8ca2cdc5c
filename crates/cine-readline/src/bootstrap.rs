//! Builds the client from configuration.

use anyhow::Result;
use cine_application::CineApp;
use cine_core::api::CatalogApi;
use cine_core::config::ClientConfig;
use cine_core::session::KeyValueStore;
use cine_core::ui::Renderer;
use cine_infrastructure::config_service::apply_api_url_override;
use cine_infrastructure::{
    CinePaths, ConfigService, FileKeyValueStore, HttpCatalogApi, InMemoryKeyValueStore,
};
use std::path::PathBuf;
use std::sync::Arc;

/// Startup choices taken from the command line.
#[derive(Debug, Clone, Default)]
pub struct LaunchOptions {
    pub api_url: Option<String>,
    pub config: Option<PathBuf>,
    pub ephemeral: bool,
}

/// Loads the configuration file and applies overrides.
///
/// Precedence for the API URL: `--api-url`, then `CINE_API_URL`, then the file.
pub fn load_config(options: &LaunchOptions, paths: &CinePaths) -> Result<ClientConfig> {
    let service = match &options.config {
        Some(path) => ConfigService::with_path(path.clone()),
        None => ConfigService::new(paths)?,
    };
    Ok(apply_api_url_override(
        service.get_config(),
        options.api_url.clone(),
    ))
}

pub fn build(
    options: &LaunchOptions,
    paths: &CinePaths,
    renderer: Arc<dyn Renderer>,
) -> Result<CineApp> {
    let config = load_config(options, paths)?;
    tracing::info!("[Bootstrap] Catalog API at {}", config.api.base_url);

    let api: Arc<dyn CatalogApi> = Arc::new(HttpCatalogApi::from_settings(&config.api));

    let store: Arc<dyn KeyValueStore> = if options.ephemeral {
        tracing::info!("[Bootstrap] Using in-memory storage");
        Arc::new(InMemoryKeyValueStore::new())
    } else {
        let path = paths.storage_file()?;
        tracing::info!("[Bootstrap] Using storage file {}", path.display());
        Arc::new(FileKeyValueStore::open(path)?)
    };

    Ok(CineApp::new(api, store, renderer, &config))
}

//! Infrastructure adapters for the Cine client: the HTTP catalog API, the
//! persistent key-value store, configuration loading and path resolution.

pub mod config_service;
pub mod http_api;
pub mod paths;
pub mod storage;

pub use crate::config_service::ConfigService;
pub use crate::http_api::HttpCatalogApi;
pub use crate::paths::CinePaths;
pub use crate::storage::{FileKeyValueStore, InMemoryKeyValueStore};

//! Client configuration model.
//!
//! Loaded from `config.toml` by `cine-infrastructure`'s `ConfigService`.
//! Every field has a default, so a partial or empty file is valid.

use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://localhost:3000";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ClientConfig {
    pub api: ApiSettings,
    pub ui: UiTimings,
    pub catalog: CatalogSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiSettings {
    /// Base URL of the catalog REST API, without trailing slash.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout_secs: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout_secs: 10,
        }
    }
}

impl ApiSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Delays of the UI state machine, in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiTimings {
    pub alert_visible_ms: u64,
    pub alert_fade_ms: u64,
    pub login_redirect_ms: u64,
    pub logout_redirect_ms: u64,
    pub register_redirect_ms: u64,
    pub movie_created_redirect_ms: u64,
    pub movie_deleted_redirect_ms: u64,
    pub rating_refresh_ms: u64,
}

impl Default for UiTimings {
    fn default() -> Self {
        Self {
            alert_visible_ms: 4000,
            alert_fade_ms: 300,
            login_redirect_ms: 1000,
            logout_redirect_ms: 1000,
            register_redirect_ms: 1500,
            movie_created_redirect_ms: 1500,
            movie_deleted_redirect_ms: 1000,
            rating_refresh_ms: 1500,
        }
    }
}

impl UiTimings {
    pub fn alert_visible(&self) -> Duration {
        Duration::from_millis(self.alert_visible_ms)
    }

    pub fn alert_fade(&self) -> Duration {
        Duration::from_millis(self.alert_fade_ms)
    }

    pub fn login_redirect(&self) -> Duration {
        Duration::from_millis(self.login_redirect_ms)
    }

    pub fn logout_redirect(&self) -> Duration {
        Duration::from_millis(self.logout_redirect_ms)
    }

    pub fn register_redirect(&self) -> Duration {
        Duration::from_millis(self.register_redirect_ms)
    }

    pub fn movie_created_redirect(&self) -> Duration {
        Duration::from_millis(self.movie_created_redirect_ms)
    }

    pub fn movie_deleted_redirect(&self) -> Duration {
        Duration::from_millis(self.movie_deleted_redirect_ms)
    }

    pub fn rating_refresh(&self) -> Duration {
        Duration::from_millis(self.rating_refresh_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CatalogSettings {
    /// Fetch rating aggregates concurrently. Card order stays the list order.
    pub parallel_ratings: bool,
}

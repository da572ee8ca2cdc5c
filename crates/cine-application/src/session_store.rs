//! The logged-in user, mirrored between memory and the key-value store.

use cine_core::Result;
use cine_core::session::{KeyValueStore, SESSION_KEY, UserSession};
use cine_core::ui::Renderer;
use cine_core::view::SessionIndicators;
use std::sync::{Arc, RwLock};

/// Holds the current session.
///
/// The in-memory copy and the stored record are kept equal: both are set on
/// login and both are cleared on logout. Every change refreshes the session
/// indicators.
pub struct SessionStore {
    store: Arc<dyn KeyValueStore>,
    renderer: Arc<dyn Renderer>,
    current: RwLock<Option<UserSession>>,
}

impl SessionStore {
    pub fn new(store: Arc<dyn KeyValueStore>, renderer: Arc<dyn Renderer>) -> Self {
        Self {
            store,
            renderer,
            current: RwLock::new(None),
        }
    }

    /// Loads the stored session, if any.
    ///
    /// A record that does not parse is removed and the client starts logged
    /// out. A store that cannot be read is treated as empty.
    pub fn restore(&self) -> Option<UserSession> {
        let restored = match self.store.get(SESSION_KEY) {
            Ok(Some(record)) => match UserSession::from_record(&record) {
                Ok(session) => Some(session),
                Err(e) => {
                    tracing::warn!("[Session] Discarding malformed stored session: {}", e);
                    if let Err(e) = self.store.remove(SESSION_KEY) {
                        tracing::warn!("[Session] Failed to remove stored session: {}", e);
                    }
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                tracing::warn!("[Session] Failed to read stored session: {}", e);
                None
            }
        };

        if let Some(ref session) = restored {
            tracing::info!("[Session] Restored session for user {}", session.id);
        }
        self.replace(restored.clone());
        restored
    }

    /// Persists `session` and makes it current.
    pub fn login(&self, session: UserSession) -> Result<()> {
        self.store.set(SESSION_KEY, &session.to_record()?)?;
        tracing::info!("[Session] Logged in user {}", session.id);
        self.replace(Some(session));
        Ok(())
    }

    /// Clears the session from memory and storage.
    ///
    /// Memory is cleared even when the store fails, so the client never
    /// keeps acting as a user the caller asked to forget.
    pub fn logout(&self) -> Result<()> {
        self.replace(None);
        self.store.remove(SESSION_KEY)?;
        tracing::info!("[Session] Logged out");
        Ok(())
    }

    pub fn current(&self) -> Option<UserSession> {
        self.current
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn is_logged_in(&self) -> bool {
        self.current
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .is_some()
    }

    pub fn indicators(&self) -> SessionIndicators {
        SessionIndicators::for_session(self.current().as_ref())
    }

    fn replace(&self, session: Option<UserSession>) {
        *self.current.write().unwrap_or_else(|e| e.into_inner()) = session;
        self.renderer.render_session(&self.indicators());
    }
}

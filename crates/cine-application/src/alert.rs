//! Transient alerts with auto-dismiss.

use crate::scheduler::{Scheduler, TimerSlot};
use cine_core::config::UiTimings;
use cine_core::ui::Renderer;
use cine_core::view::{Alert, AlertId, AlertKind};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

/// Shows at most one alert at a time.
///
/// A new alert replaces the visible one. Each alert fades after
/// `alert_visible` and is removed `alert_fade` later; the expiry of a replaced
/// alert never touches its successor.
pub struct AlertPresenter {
    renderer: Arc<dyn Renderer>,
    scheduler: Arc<Scheduler>,
    timings: UiTimings,
    current: Mutex<Option<AlertId>>,
    next_id: AtomicU64,
}

impl AlertPresenter {
    pub fn new(renderer: Arc<dyn Renderer>, scheduler: Arc<Scheduler>, timings: UiTimings) -> Self {
        Self {
            renderer,
            scheduler,
            timings,
            current: Mutex::new(None),
            next_id: AtomicU64::new(0),
        }
    }

    pub fn success(self: &Arc<Self>, message: impl Into<String>) -> AlertId {
        self.show(message, AlertKind::Success)
    }

    pub fn error(self: &Arc<Self>, message: impl Into<String>) -> AlertId {
        self.show(message, AlertKind::Error)
    }

    pub fn show(self: &Arc<Self>, message: impl Into<String>, kind: AlertKind) -> AlertId {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let alert = Alert {
            id,
            message: message.into(),
            kind,
        };

        let previous = self.lock_current().replace(id);
        if let Some(previous) = previous {
            self.renderer.remove_alert(previous);
        }
        tracing::debug!("[Alert] #{} {:?}: {}", id, kind, alert.message);
        self.renderer.show_alert(&alert);

        let this = Arc::clone(self);
        self.scheduler
            .schedule(TimerSlot::Alert, self.timings.alert_visible(), async move {
                this.expire(id).await;
            });

        id
    }

    /// Removes the alert if it is still the visible one.
    ///
    /// Returns false when `id` was already replaced or removed.
    pub fn dismiss(&self, id: AlertId) -> bool {
        let mut current = self.lock_current();
        if *current != Some(id) {
            return false;
        }
        *current = None;
        self.renderer.remove_alert(id);
        true
    }

    pub fn current(&self) -> Option<AlertId> {
        *self.lock_current()
    }

    async fn expire(&self, id: AlertId) {
        if self.current() != Some(id) {
            return;
        }
        self.renderer.fade_alert(id);
        tokio::time::sleep(self.timings.alert_fade()).await;
        self.dismiss(id);
    }

    fn lock_current(&self) -> std::sync::MutexGuard<'_, Option<AlertId>> {
        self.current.lock().unwrap_or_else(|e| e.into_inner())
    }
}

//! View switching.

use crate::scheduler::{Scheduler, TimerSlot};
use async_trait::async_trait;
use cine_core::ui::Renderer;
use cine_core::view::ViewName;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::Duration;

/// Work that runs every time a view becomes active.
#[async_trait]
pub trait OnEnter: Send + Sync {
    async fn on_enter(&self);
}

/// Tracks the active view and switches between them.
///
/// Exactly one view is active at a time. Delayed navigation shares a single
/// slot: scheduling a new one cancels whichever is still pending.
pub struct Navigator {
    renderer: Arc<dyn Renderer>,
    scheduler: Arc<Scheduler>,
    current: RwLock<ViewName>,
    hooks: RwLock<HashMap<ViewName, Arc<dyn OnEnter>>>,
}

impl Navigator {
    pub fn new(renderer: Arc<dyn Renderer>, scheduler: Arc<Scheduler>) -> Self {
        Self {
            renderer,
            scheduler,
            current: RwLock::new(ViewName::Home),
            hooks: RwLock::new(HashMap::new()),
        }
    }

    /// Registers the hook run on entering `view`, replacing any earlier one.
    pub fn on_enter(&self, view: ViewName, hook: Arc<dyn OnEnter>) {
        self.hooks
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(view, hook);
    }

    /// Activates `view` and runs its hook.
    pub async fn show(&self, view: ViewName) {
        self.switch(view);

        let hook = self
            .hooks
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(&view)
            .cloned();
        if let Some(hook) = hook {
            hook.on_enter().await;
        }
    }

    /// Activates `view` without running its hook.
    pub fn switch(&self, view: ViewName) {
        *self.current.write().unwrap_or_else(|e| e.into_inner()) = view;
        tracing::debug!("[Navigator] Showing {}", view);
        self.renderer.show_view(view);
    }

    /// Activates `view` after `delay`, cancelling any pending navigation.
    pub fn navigate_after(self: &Arc<Self>, view: ViewName, delay: Duration) {
        let this = Arc::clone(self);
        self.scheduler
            .schedule(TimerSlot::Navigation, delay, async move {
                this.show(view).await;
            });
    }

    /// Cancels a pending delayed navigation. Returns true if one was pending.
    pub fn cancel_pending(&self) -> bool {
        self.scheduler.cancel(TimerSlot::Navigation)
    }

    pub fn has_pending(&self) -> bool {
        self.scheduler.is_pending(TimerSlot::Navigation)
    }

    pub fn current(&self) -> ViewName {
        *self.current.read().unwrap_or_else(|e| e.into_inner())
    }
}

//! Cancellable delayed actions.
//!
//! Each delayed action lives in a named slot. Scheduling into an occupied slot
//! cancels the previous action if it is still waiting out its delay; an action
//! whose delay already elapsed is left to finish, so in-flight requests are
//! never cut short.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tokio::task::JoinHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerSlot {
    /// Delayed view change after a mutation.
    Navigation,
    /// Delayed detail reload after a rating.
    DetailRefresh,
    /// Alert auto-dismiss.
    Alert,
}

struct PendingTimer {
    handle: JoinHandle<()>,
    fired: Arc<AtomicBool>,
}

impl PendingTimer {
    fn is_waiting(&self) -> bool {
        !self.fired.load(Ordering::SeqCst) && !self.handle.is_finished()
    }
}

#[derive(Default)]
pub struct Scheduler {
    slots: Mutex<HashMap<TimerSlot, PendingTimer>>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `task` after `delay`, replacing whatever waits in `slot`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule<F>(&self, slot: TimerSlot, delay: Duration, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let fired = Arc::new(AtomicBool::new(false));
        let flag = fired.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            flag.store(true, Ordering::SeqCst);
            task.await;
        });

        let previous = self
            .slots
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(slot, PendingTimer { handle, fired });

        if let Some(previous) = previous
            && previous.is_waiting()
        {
            tracing::debug!("[Scheduler] Replacing pending {:?} action", slot);
            previous.handle.abort();
        }
    }

    /// Cancels the action waiting in `slot`. Returns true if one was cancelled.
    pub fn cancel(&self, slot: TimerSlot) -> bool {
        let mut slots = self.slots.lock().unwrap_or_else(|e| e.into_inner());
        match slots.remove(&slot) {
            Some(pending) if pending.is_waiting() => {
                pending.handle.abort();
                true
            }
            _ => false,
        }
    }

    /// True while an action in `slot` is still waiting out its delay.
    pub fn is_pending(&self, slot: TimerSlot) -> bool {
        self.slots
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(&slot)
            .is_some_and(PendingTimer::is_waiting)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[tokio::test(start_paused = true)]
    async fn test_runs_after_delay() {
        let scheduler = Scheduler::new();
        let runs = Arc::new(AtomicUsize::new(0));
        let counter = runs.clone();
        scheduler.schedule(TimerSlot::Navigation, Duration::from_millis(1000), async move {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        tokio::time::sleep(Duration::from_millis(999)).await;
        assert_eq!(runs.load(Ordering::SeqCst), 0);
        assert!(scheduler.is_pending(TimerSlot::Navigation));

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(runs.load(Ordering::SeqCst), 1);
        assert!(!scheduler.is_pending(TimerSlot::Navigation));
    }

    #[tokio::test(start_paused = true)]
    async fn test_rescheduling_replaces_waiting_action() {
        let scheduler = Scheduler::new();
        let log = Arc::new(Mutex::new(Vec::new()));

        let first = log.clone();
        scheduler.schedule(TimerSlot::Navigation, Duration::from_millis(1500), async move {
            first.lock().unwrap().push("login");
        });
        let second = log.clone();
        scheduler.schedule(TimerSlot::Navigation, Duration::from_millis(1000), async move {
            second.lock().unwrap().push("home");
        });

        tokio::time::sleep(Duration::from_millis(2000)).await;
        assert_eq!(*log.lock().unwrap(), vec!["home"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_slots_are_independent_and_cancellable() {
        let scheduler = Scheduler::new();
        let runs = Arc::new(AtomicUsize::new(0));

        let a = runs.clone();
        scheduler.schedule(TimerSlot::Navigation, Duration::from_millis(10), async move {
            a.fetch_add(1, Ordering::SeqCst);
        });
        let b = runs.clone();
        scheduler.schedule(TimerSlot::DetailRefresh, Duration::from_millis(10), async move {
            b.fetch_add(10, Ordering::SeqCst);
        });

        assert!(scheduler.cancel(TimerSlot::DetailRefresh));
        assert!(!scheduler.cancel(TimerSlot::Alert));

        tokio::time::sleep(Duration::from_millis(20)).await;
        assert_eq!(runs.load(Ordering::SeqCst), 1);
    }
}

//! Transient full-screen overlay state.
//!
//! `show` flips the overlay on and schedules a fire-and-forget dismissal on
//! the current tokio runtime. Dismissals are never cancelled; if the runtime
//! goes away first the pending task is simply dropped.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tokio::runtime::Handle;

#[derive(Debug, Clone, Default)]
pub struct Overlay {
    visible: Arc<AtomicBool>,
}

impl Overlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible.load(Ordering::SeqCst)
    }

    /// Shows the overlay and hides it again after `duration`.
    ///
    /// Returns `false` (and shows nothing) when called outside a tokio
    /// runtime.
    pub fn show(&self, duration: Duration) -> bool {
        self.show_then(duration, || {})
    }

    /// Like [`show`](Self::show), running `on_dismiss` right after hiding.
    pub fn show_then<F>(&self, duration: Duration, on_dismiss: F) -> bool
    where
        F: FnOnce() + Send + 'static,
    {
        let handle = match Handle::try_current() {
            Ok(handle) => handle,
            Err(e) => {
                tracing::warn!(error = %e, "overlay requested outside a tokio runtime");
                return false;
            }
        };

        self.visible.store(true, Ordering::SeqCst);
        tracing::debug!(duration_ms = duration.as_millis() as u64, "overlay shown");

        let visible = Arc::clone(&self.visible);
        handle.spawn(async move {
            tokio::time::sleep(duration).await;
            visible.store(false, Ordering::SeqCst);
            tracing::debug!("overlay dismissed");
            on_dismiss();
        });
        true
    }
}

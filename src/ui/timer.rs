//! Cancellable one-shot callbacks tied to the owner's lifetime.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// A callback scheduled on the runtime. Dropping the task cancels it.
pub struct ScheduledTask {
    handle: JoinHandle<()>,
}

impl ScheduledTask {
    pub fn spawn<F>(runtime: &Handle, delay: Duration, callback: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let handle = runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            callback();
        });
        Self { handle }
    }

    pub fn cancel(&self) {
        self.handle.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for ScheduledTask {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// "Copied" indicator that reverts to "Copy" after a fixed delay.
///
/// A new trigger cancels the pending revert and restarts the delay.
pub struct CopyFeedback {
    copied: Arc<AtomicBool>,
    revert: Option<ScheduledTask>,
    duration: Duration,
    runtime: Handle,
}

impl CopyFeedback {
    pub fn new(runtime: Handle, duration: Duration) -> Self {
        Self {
            copied: Arc::new(AtomicBool::new(false)),
            revert: None,
            duration,
            runtime,
        }
    }

    pub fn trigger(&mut self) {
        if let Some(previous) = self.revert.take() {
            previous.cancel();
        }
        self.copied.store(true, Ordering::SeqCst);
        let copied = Arc::clone(&self.copied);
        self.revert = Some(ScheduledTask::spawn(&self.runtime, self.duration, move || {
            copied.store(false, Ordering::SeqCst);
        }));
    }

    /// Drop any pending revert and show "Copy" again.
    pub fn reset(&mut self) {
        self.revert = None;
        self.copied.store(false, Ordering::SeqCst);
    }

    pub fn is_copied(&self) -> bool {
        self.copied.load(Ordering::SeqCst)
    }

    pub fn label(&self) -> &'static str {
        if self.is_copied() {
            "Copied"
        } else {
            "Copy"
        }
    }
}

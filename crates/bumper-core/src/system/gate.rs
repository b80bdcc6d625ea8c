//! External suspend/resume of a task
//!
//! Embassy tasks cannot be suspended from outside, so a task that may be paused owns a
//! [`TaskGate`] and passes through [`TaskGate::checkpoint`] at every point where pausing is
//! allowed. Other tasks flip the gate with [`TaskGate::suspend`] and [`TaskGate::resume`].

use core::sync::atomic::{AtomicBool, Ordering};

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

/// Suspend/resume handle for one task
pub struct TaskGate {
    suspended: AtomicBool,
    resumed: Signal<CriticalSectionRawMutex, ()>,
}

impl TaskGate {
    /// Creates an open gate.
    pub const fn new() -> Self {
        Self {
            suspended: AtomicBool::new(false),
            resumed: Signal::new(),
        }
    }

    /// Holds the task at its next checkpoint. Returns `false` if it was already suspended.
    pub fn suspend(&self) -> bool {
        let changed = !self.suspended.swap(true, Ordering::AcqRel);
        if changed {
            self.resumed.reset();
        }
        changed
    }

    /// Lets the task continue. Returns `false` if it was not suspended.
    pub fn resume(&self) -> bool {
        let changed = self.suspended.swap(false, Ordering::AcqRel);
        if changed {
            self.resumed.signal(());
        }
        changed
    }

    /// Returns `true` while the gate holds its task.
    pub fn is_suspended(&self) -> bool {
        self.suspended.load(Ordering::Acquire)
    }

    /// Returns immediately when open, otherwise waits until resumed.
    pub async fn checkpoint(&self) {
        while self.is_suspended() {
            self.resumed.wait().await;
        }
    }
}

impl Default for TaskGate {
    fn default() -> Self {
        Self::new()
    }
}

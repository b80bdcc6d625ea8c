//! Interrupt to task handoff
//!
//! [`BumpSignal`] is the binary semaphore between the bump interrupt handler and the
//! acquisition task. The signal carries the captured status itself, so a status is always
//! consumed together with the give that delivered it. At most one signal is pending:
//! interrupts arriving before the consumer runs coalesce into a single wakeup carrying the
//! status of the most recent one.

use core::sync::atomic::{AtomicBool, AtomicU32, Ordering};

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

use crate::system::reading::SensorReading;

/// What a give from interrupt context did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Give {
    /// The consumer was blocked on the semaphore and is now runnable.
    pub woke_waiter: bool,
    /// A signal was already pending, so this one replaced it.
    pub coalesced: bool,
}

/// Binary semaphore carrying the captured interrupt status.
pub struct BumpSignal {
    pending: Signal<CriticalSectionRawMutex, SensorReading>,
    waiting: AtomicBool,
    coalesced: AtomicU32,
}

impl BumpSignal {
    /// Creates an unsignaled semaphore.
    pub const fn new() -> Self {
        Self {
            pending: Signal::new(),
            waiting: AtomicBool::new(false),
            coalesced: AtomicU32::new(0),
        }
    }

    /// Signals the semaphore with `status` from interrupt context.
    pub fn give_from_isr(&self, status: SensorReading) -> Give {
        let coalesced = self.pending.signaled();
        if coalesced {
            self.coalesced.fetch_add(1, Ordering::Relaxed);
        }
        self.pending.signal(status);

        Give {
            woke_waiter: self.waiting.load(Ordering::Acquire),
            coalesced,
        }
    }

    /// Blocks until the semaphore is signaled, consumes the signal and returns its status.
    pub async fn take(&self) -> SensorReading {
        self.waiting.store(true, Ordering::Release);
        let status = self.pending.wait().await;
        self.waiting.store(false, Ordering::Release);
        status
    }

    /// Consumes a pending signal without blocking.
    pub fn try_take(&self) -> Option<SensorReading> {
        self.pending.try_take()
    }

    /// Returns `true` if a signal is pending.
    pub fn is_pending(&self) -> bool {
        self.pending.signaled()
    }

    /// Number of gives that replaced an already pending signal, wrapping.
    pub fn coalesced(&self) -> u32 {
        self.coalesced.load(Ordering::Relaxed)
    }
}

impl Default for BumpSignal {
    fn default() -> Self {
        Self::new()
    }
}

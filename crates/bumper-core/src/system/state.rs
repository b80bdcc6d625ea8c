//! Shared State
//!
//! Everything tasks share lives in one [`SharedState`]. The firmware keeps a single instance in a
//! `static`; tests build a fresh one per scenario.
//!
//! # Ownership of writes
//! - Operating mode and bump signal: written once by the master task
//! - Polled reading: written by the acquisition task in polling mode only
//! - Bump events: published by the acquisition task in interrupt-driven mode only
//! - Audio gate: flipped by the override task
//!
//! Readers never lock; each cell defines its own memory ordering.

use embassy_sync::once_lock::OnceLock;

use crate::error::{Error, Result};
use crate::system::event::{EventReceiver, EventWatch};
use crate::system::gate::TaskGate;
use crate::system::mode::{ModeCell, OperatingMode, SelectedMode};
use crate::system::reading::ReadingCell;
use crate::system::signal::BumpSignal;

/// Cross-task state of the robot
pub struct SharedState {
    /// Operating mode, fixed once by the master task
    pub mode: ModeCell,
    /// Latest polled bump reading
    pub reading: ReadingCell,
    /// Bump events captured in interrupt-driven mode
    pub events: EventWatch,
    /// Suspend/resume handle of the audio task
    pub audio: TaskGate,
    signal: OnceLock<BumpSignal>,
}

impl SharedState {
    /// Creates the boot-time state: no mode, no signal, audio running.
    pub const fn new() -> Self {
        Self {
            mode: ModeCell::new(),
            reading: ReadingCell::new(),
            events: EventWatch::new(),
            audio: TaskGate::new(),
            signal: OnceLock::new(),
        }
    }

    /// Commits the operating mode.
    ///
    /// Interrupt-driven mode gets its bump signal created before the mode becomes visible, so
    /// no task can observe the mode without the signal. Polling mode never creates one.
    pub fn commit_mode(&self, mode: SelectedMode) -> Result<()> {
        if self.mode.current() != OperatingMode::Unselected {
            return Err(Error::ModeAlreadySelected);
        }
        if mode == SelectedMode::InterruptDriven {
            self.signal
                .init(BumpSignal::new())
                .map_err(|_| Error::SignalAlreadyCreated)?;
        }
        self.mode.select(mode)
    }

    /// The bump signal, if interrupt-driven mode created it
    pub fn signal(&self) -> Option<&BumpSignal> {
        self.signal.try_get()
    }

    /// Waits for the bump signal to exist.
    pub async fn wait_signal(&self) -> &BumpSignal {
        self.signal.get().await
    }

    /// Subscribes to bump events. `None` once every receiver slot is taken.
    pub fn event_receiver(&self) -> Option<EventReceiver<'_>> {
        self.events.receiver()
    }
}

impl Default for SharedState {
    fn default() -> Self {
        Self::new()
    }
}

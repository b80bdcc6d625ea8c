//! Bump events published to the actuation tasks
//!
//! In interrupt-driven mode the acquisition task turns every semaphore wakeup into a
//! [`BumpEvent`] and publishes it on a [`Watch`]. Each actuation task owns one receiver and
//! only ever polls it, so the single blocking wait of the system stays in the acquisition task.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::watch::{Receiver, Watch};

use crate::system::reading::SensorReading;

/// Receiver slots: one for the motor task, one for the LED task.
pub const EVENT_RECEIVERS: usize = 2;

/// Channel carrying the latest bump event
pub type EventWatch = Watch<CriticalSectionRawMutex, BumpEvent, EVENT_RECEIVERS>;

/// Per-task subscription to [`EventWatch`]
pub type EventReceiver<'a> = Receiver<'a, CriticalSectionRawMutex, BumpEvent, EVENT_RECEIVERS>;

/// A captured interrupt, as handed to the actuators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BumpEvent {
    /// Counts semaphore wakeups, starting at 1.
    pub sequence: u32,
    /// Interrupt status captured by the handler
    pub status: SensorReading,
}

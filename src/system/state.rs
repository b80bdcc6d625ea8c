//! Global State
//!
//! The single [`SharedState`] instance all tasks coordinate through, the timing they run with,
//! and the status LED the master and override tasks take turns on.

use core::cell::RefCell;

use bumper_core::hal::StatusLed;
use bumper_core::system::state::SharedState;
use bumper_core::Timing;
use embassy_rp::gpio::{Level, Output};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;

use crate::system::resources::StatusLedResources;

/// Cross-task state, lives for the whole program
pub static SHARED: SharedState = SharedState::new();

/// Timing every task runs with
pub static TIMING: Timing = Timing::DEFAULT;

/// Global status LED instance.
///
/// The master task blinks it until the mode is selected, the override task lights it while audio
/// is suspended afterwards. Both run on different executors, hence the critical section mutex.
static STATUS_LED: Mutex<CriticalSectionRawMutex, RefCell<Option<Output<'static>>>> =
    Mutex::new(RefCell::new(None));

/// Initializes the status LED.
///
/// This should only be called once during system initialization in main.rs,
/// before any tasks are spawned.
pub fn init_status_led(r: StatusLedResources) {
    let led = Output::new(r.led_pin, Level::Low);
    STATUS_LED.lock(|cell| cell.replace(Some(led)));
}

/// Handle to the global status LED. Does nothing before [`init_status_led`].
pub struct StatusLight;

impl StatusLed for StatusLight {
    fn set(&mut self, on: bool) {
        STATUS_LED.lock(|cell| {
            if let Some(led) = cell.borrow_mut().as_mut() {
                led.set_level(Level::from(on));
            }
        });
    }

    fn toggle(&mut self) {
        STATUS_LED.lock(|cell| {
            if let Some(led) = cell.borrow_mut().as_mut() {
                led.toggle();
            }
        });
    }
}

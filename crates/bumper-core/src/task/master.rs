//! Master task
//!
//! Runs first, at the highest priority. Blinks the status LED while waiting for one of the two
//! mode buttons, commits the chosen mode, waits for the buttons to settle and retires for good.

use embassy_time::Timer;

use crate::config::Timing;
use crate::error::Result;
use crate::hal::{ModeButtons, ModeInputs, StatusLed};
use crate::system::mode::SelectedMode;
use crate::system::state::SharedState;

/// Lifecycle of the master task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MasterState {
    /// Blinking, sampling the mode buttons
    WaitingForSelection,
    /// Mode committed, waiting out the settle delay
    Settling(SelectedMode),
    /// Done. Terminal: nothing leaves this state.
    Retired(SelectedMode),
}

/// Decides the mode from the buttons.
///
/// The interrupt-driven button wins when both are pressed.
pub const fn decide(inputs: ModeInputs) -> Option<SelectedMode> {
    if inputs.interrupt_driven {
        Some(SelectedMode::InterruptDriven)
    } else if inputs.polling {
        Some(SelectedMode::Polling)
    } else {
        None
    }
}

/// Boot-time mode selector
#[derive(Debug)]
pub struct MasterTask {
    state: MasterState,
}

impl MasterTask {
    /// Creates a master task waiting for selection.
    pub const fn new() -> Self {
        Self {
            state: MasterState::WaitingForSelection,
        }
    }

    /// Current lifecycle state
    pub fn state(&self) -> MasterState {
        self.state
    }

    /// Drives the state machine to [`MasterState::Retired`] and returns the selected mode.
    ///
    /// Never completes if no button is ever pressed. Running an already retired master returns
    /// its mode without touching anything.
    pub async fn run<B: ModeButtons, L: StatusLed>(
        &mut self,
        shared: &SharedState,
        buttons: &mut B,
        led: &mut L,
        timing: &Timing,
    ) -> Result<SelectedMode> {
        loop {
            self.state = match self.state {
                MasterState::WaitingForSelection => match decide(buttons.sample()) {
                    Some(mode) => {
                        shared.commit_mode(mode)?;
                        led.set(false);
                        info!("Operating mode selected: {}", mode);
                        MasterState::Settling(mode)
                    }
                    None => {
                        led.toggle();
                        Timer::after(timing.blink_period).await;
                        MasterState::WaitingForSelection
                    }
                },
                MasterState::Settling(mode) => {
                    Timer::after(timing.settle).await;
                    info!("Master task retired");
                    MasterState::Retired(mode)
                }
                MasterState::Retired(mode) => return Ok(mode),
            };
        }
    }
}

impl Default for MasterTask {
    fn default() -> Self {
        Self::new()
    }
}

//! Manual override of the audio task
//!
//! A push switch toggles the tune between playing and paused. The switch is sampled, not
//! interrupt driven; presses closer together than the settle window count once.

use embassy_time::{Duration, Instant, Timer};

use crate::config::Timing;
use crate::hal::{OverrideSwitch, StatusLed};
use crate::system::debounce::Debouncer;
use crate::system::state::SharedState;

/// Whether the audio task may play
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AudioState {
    /// Tune running
    Playing,
    /// Tune held at its next note
    Suspended,
}

/// Two-state toggle fed with switch presses
#[derive(Debug, Clone, Copy)]
pub struct OverrideMachine {
    state: AudioState,
    debouncer: Debouncer,
}

impl OverrideMachine {
    /// Starts in [`AudioState::Playing`].
    pub const fn new(settle: Duration) -> Self {
        Self {
            state: AudioState::Playing,
            debouncer: Debouncer::new(settle),
        }
    }

    /// Current state
    pub fn state(&self) -> AudioState {
        self.state
    }

    /// Reports a press seen at `now`. Returns the new state, or `None` if the press bounced.
    pub fn on_press(&mut self, now: Instant) -> Option<AudioState> {
        if !self.debouncer.accept(now) {
            return None;
        }
        self.state = match self.state {
            AudioState::Playing => AudioState::Suspended,
            AudioState::Suspended => AudioState::Playing,
        };
        Some(self.state)
    }
}

/// Runs the override task.
///
/// Starts once the mode is selected, so the boot-time button press is never taken for an
/// override. A switch already held at that point counts only after it is released.
pub async fn manual_override<W: OverrideSwitch, L: StatusLed>(
    shared: &SharedState,
    switch: &mut W,
    led: &mut L,
    timing: &Timing,
) {
    shared.mode.wait_selected().await;

    let mut machine = OverrideMachine::new(timing.override_settle);
    let mut was_on = switch.is_on();
    loop {
        Timer::after(timing.override_poll).await;

        let on = switch.is_on();
        let pressed = on && !was_on;
        was_on = on;
        if !pressed {
            continue;
        }

        match machine.on_press(Instant::now()) {
            Some(AudioState::Suspended) => {
                shared.audio.suspend();
                led.set(true);
                info!("Audio suspended");
            }
            Some(AudioState::Playing) => {
                shared.audio.resume();
                led.set(false);
                info!("Audio resumed");
            }
            None => debug!("Override press ignored, inside settle window"),
        }
    }
}

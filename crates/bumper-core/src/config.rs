//! Timing configuration
//!
//! Every delay in the system is a wall-clock [`Duration`] measured against the embassy monotonic
//! clock, never an iteration count, so the same values hold regardless of CPU frequency.

use embassy_time::Duration;

/// Durations and speeds used by the tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Timing {
    /// Half period of the status LED blink while the master task waits for a mode button.
    pub blink_period: Duration,
    /// Delay between mode selection and the master task retiring.
    pub settle: Duration,
    /// Interval between two raw sensor samples in polling mode.
    pub poll_period: Duration,
    /// Interval at which actuation tasks look at published sensor state.
    pub actuation_period: Duration,
    /// Interval at which the override switch is sampled.
    pub override_poll: Duration,
    /// Edges of the override switch closer than this to the last accepted edge are ignored.
    pub override_settle: Duration,
    /// How long the bump maneuver reverses.
    pub reverse: Duration,
    /// How long the bump maneuver turns away from the obstacle.
    pub turn: Duration,
    /// Forward speed in percent while cruising.
    pub cruise_speed: u8,
    /// Speed in percent used for the reverse and turn legs of the bump maneuver.
    pub maneuver_speed: u8,
}

impl Timing {
    /// Values the firmware runs with.
    pub const DEFAULT: Self = Self {
        blink_period: Duration::from_millis(250),
        settle: Duration::from_millis(200),
        poll_period: Duration::from_millis(1),
        actuation_period: Duration::from_millis(5),
        override_poll: Duration::from_millis(10),
        override_settle: Duration::from_millis(300),
        reverse: Duration::from_millis(400),
        turn: Duration::from_millis(300),
        cruise_speed: 40,
        maneuver_speed: 30,
    };
}

impl Default for Timing {
    fn default() -> Self {
        Self::DEFAULT
    }
}

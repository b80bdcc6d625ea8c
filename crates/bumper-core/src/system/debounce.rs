//! Edge debouncing against the monotonic clock

use embassy_time::{Duration, Instant};

/// Accepts an edge only if the previous accepted edge is at least `settle` old.
#[derive(Debug, Clone, Copy)]
pub struct Debouncer {
    settle: Duration,
    last_accepted: Option<Instant>,
}

impl Debouncer {
    /// Creates a debouncer that has not seen any edge yet.
    pub const fn new(settle: Duration) -> Self {
        Self {
            settle,
            last_accepted: None,
        }
    }

    /// Reports an edge seen at `now`. Returns `true` if it counts.
    pub fn accept(&mut self, now: Instant) -> bool {
        match self.last_accepted {
            Some(last) if now.saturating_duration_since(last) < self.settle => false,
            _ => {
                self.last_accepted = Some(now);
                true
            }
        }
    }
}

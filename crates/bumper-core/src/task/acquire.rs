//! Sensor acquisition task
//!
//! Waits for the operating mode, then produces bump state with that mode's strategy for the rest
//! of its life: a polled snapshot, or events taken from the interrupt signal.

use crate::config::Timing;
use crate::hal::{BumpSensor, EdgeTrigger};
use crate::strategy::{ModeStrategy, Strategy};
use crate::system::state::SharedState;

/// Runs the acquisition task.
pub async fn acquisition<S: BumpSensor + EdgeTrigger>(
    shared: &SharedState,
    sensor: &mut S,
    timing: &Timing,
) {
    let strategy = Strategy::for_mode(shared.mode.wait_selected().await);
    strategy.acquire(shared, sensor, timing).await;
}

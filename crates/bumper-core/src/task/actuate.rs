//! Actuation tasks
//!
//! The motor and LED tasks only consume state the acquisition task already published. Neither
//! waits on hardware: before the mode is known they wait on the mode gate, afterwards they poll
//! the reading cell or the event watch on a fixed period.

use crate::config::Timing;
use crate::hal::{ColorLed, Motor};
use crate::strategy::{ModeStrategy, Strategy};
use crate::system::state::SharedState;

/// Runs the motor task.
pub async fn motor<M: Motor>(shared: &SharedState, motor: &mut M, timing: &Timing) {
    let strategy = Strategy::for_mode(shared.mode.wait_selected().await);
    strategy.drive_motor(shared, motor, timing).await;
}

/// Runs the colour LED task.
pub async fn led<L: ColorLed>(shared: &SharedState, led: &mut L, timing: &Timing) {
    let strategy = Strategy::for_mode(shared.mode.wait_selected().await);
    strategy.drive_led(shared, led, timing).await;
}

//! Mode strategies
//!
//! Each operating mode is one implementation of [`ModeStrategy`]. A task picks its strategy
//! once, through [`Strategy::for_mode`], after the mode is selected and then runs that strategy's
//! loop for the rest of its life. No task checks the mode again.

use core::future::pending;

use embassy_time::Timer;

use crate::config::Timing;
use crate::hal::{BumpSensor, ColorLed, EdgeTrigger, Motor, MotorCommand};
use crate::system::event::{BumpEvent, EventReceiver};
use crate::system::mode::SelectedMode;
use crate::system::reading::{SensorReading, Side};
use crate::system::state::SharedState;

/// Mode-specific behaviour of the acquisition and actuation tasks.
///
/// Every method loops forever.
#[allow(async_fn_in_trait)]
pub trait ModeStrategy {
    /// Mode this strategy implements
    fn mode(&self) -> SelectedMode;

    /// Produces sensor state for the actuators.
    async fn acquire<S: BumpSensor + EdgeTrigger>(
        &self,
        shared: &SharedState,
        sensor: &mut S,
        timing: &Timing,
    );

    /// Drives the motors from published sensor state.
    async fn drive_motor<M: Motor>(&self, shared: &SharedState, motor: &mut M, timing: &Timing);

    /// Drives the colour indicator from published sensor state.
    async fn drive_led<L: ColorLed>(&self, shared: &SharedState, led: &mut L, timing: &Timing);
}

/// Polled sensing: continuous sampling, actuators track the latest reading.
#[derive(Debug, Clone, Copy)]
pub struct Polling;

impl ModeStrategy for Polling {
    fn mode(&self) -> SelectedMode {
        SelectedMode::Polling
    }

    async fn acquire<S: BumpSensor + EdgeTrigger>(
        &self,
        shared: &SharedState,
        sensor: &mut S,
        timing: &Timing,
    ) {
        info!("Sampling bump sensor every {} us", timing.poll_period.as_micros());
        let mut last = SensorReading::NONE;
        loop {
            let reading = sensor.read();
            shared.reading.publish(reading);
            if reading != last {
                debug!("Bump reading {=u8:#b}", reading.bits());
                last = reading;
            }
            Timer::after(timing.poll_period).await;
        }
    }

    /// Cruises forward for good. Polling mode ignores bumps for the motor; only the LED
    /// reflects them.
    async fn drive_motor<M: Motor>(&self, _shared: &SharedState, motor: &mut M, timing: &Timing) {
        info!("Cruising forward at {}%", timing.cruise_speed);
        motor.drive(MotorCommand::Forward(timing.cruise_speed));
        pending::<()>().await;
    }

    async fn drive_led<L: ColorLed>(&self, shared: &SharedState, led: &mut L, timing: &Timing) {
        let mut shown = None;
        loop {
            let color = shared.reading.latest().color();
            if shown != Some(color) {
                led.set_color(color);
                shown = Some(color);
            }
            Timer::after(timing.actuation_period).await;
        }
    }
}

/// Interrupt-driven sensing: one scripted response per captured bump.
#[derive(Debug, Clone, Copy)]
pub struct InterruptDriven;

impl InterruptDriven {
    /// Backs off and turns away from the bumped side, then resumes cruising.
    async fn maneuver<M: Motor>(motor: &mut M, event: BumpEvent, timing: &Timing) {
        let turn = match event.status.side() {
            Some(Side::Left) => MotorCommand::TurnRight(timing.maneuver_speed),
            _ => MotorCommand::TurnLeft(timing.maneuver_speed),
        };
        debug!("Bump #{} maneuver, turning {}", event.sequence, turn);

        motor.drive(MotorCommand::Stop);
        motor.drive(MotorCommand::Backward(timing.maneuver_speed));
        Timer::after(timing.reverse).await;
        motor.drive(turn);
        Timer::after(timing.turn).await;
        motor.drive(MotorCommand::Forward(timing.cruise_speed));
    }

    fn subscribe(shared: &SharedState) -> EventReceiver<'_> {
        shared
            .event_receiver()
            .expect("Bump events should have a receiver slot per actuation task")
    }
}

impl ModeStrategy for InterruptDriven {
    fn mode(&self) -> SelectedMode {
        SelectedMode::InterruptDriven
    }

    async fn acquire<S: BumpSensor + EdgeTrigger>(
        &self,
        shared: &SharedState,
        sensor: &mut S,
        _timing: &Timing,
    ) {
        sensor.arm();
        let signal = shared.wait_signal().await;
        let sender = shared.events.sender();
        info!("Bump edge interrupt armed");

        let mut sequence: u32 = 0;
        loop {
            let status = signal.take().await;
            sequence = sequence.wrapping_add(1);
            debug!("Bump #{} captured {=u8:#b}", sequence, status.bits());
            sender.send(BumpEvent { sequence, status });
        }
    }

    async fn drive_motor<M: Motor>(&self, shared: &SharedState, motor: &mut M, timing: &Timing) {
        let mut events = Self::subscribe(shared);
        motor.drive(MotorCommand::Forward(timing.cruise_speed));
        loop {
            if let Some(event) = events.try_changed() {
                Self::maneuver(motor, event, timing).await;
            }
            Timer::after(timing.actuation_period).await;
        }
    }

    async fn drive_led<L: ColorLed>(&self, shared: &SharedState, led: &mut L, timing: &Timing) {
        let mut events = Self::subscribe(shared);
        loop {
            if let Some(event) = events.try_changed() {
                led.set_color(event.status.color());
            }
            Timer::after(timing.actuation_period).await;
        }
    }
}

/// Strategy for whichever mode was selected
#[derive(Debug, Clone, Copy)]
pub enum Strategy {
    /// See [`Polling`]
    Polling(Polling),
    /// See [`InterruptDriven`]
    InterruptDriven(InterruptDriven),
}

impl Strategy {
    /// Picks the strategy for a mode.
    pub const fn for_mode(mode: SelectedMode) -> Self {
        match mode {
            SelectedMode::Polling => Strategy::Polling(Polling),
            SelectedMode::InterruptDriven => Strategy::InterruptDriven(InterruptDriven),
        }
    }
}

impl ModeStrategy for Strategy {
    fn mode(&self) -> SelectedMode {
        match self {
            Strategy::Polling(s) => s.mode(),
            Strategy::InterruptDriven(s) => s.mode(),
        }
    }

    async fn acquire<S: BumpSensor + EdgeTrigger>(
        &self,
        shared: &SharedState,
        sensor: &mut S,
        timing: &Timing,
    ) {
        match self {
            Strategy::Polling(s) => s.acquire(shared, sensor, timing).await,
            Strategy::InterruptDriven(s) => s.acquire(shared, sensor, timing).await,
        }
    }

    async fn drive_motor<M: Motor>(&self, shared: &SharedState, motor: &mut M, timing: &Timing) {
        match self {
            Strategy::Polling(s) => s.drive_motor(shared, motor, timing).await,
            Strategy::InterruptDriven(s) => s.drive_motor(shared, motor, timing).await,
        }
    }

    async fn drive_led<L: ColorLed>(&self, shared: &SharedState, led: &mut L, timing: &Timing) {
        match self {
            Strategy::Polling(s) => s.drive_led(shared, led, timing).await,
            Strategy::InterruptDriven(s) => s.drive_led(shared, led, timing).await,
        }
    }
}

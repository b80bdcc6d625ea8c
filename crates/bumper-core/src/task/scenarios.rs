//! Whole-system runs: every task on one simulated clock, from boot.

use core::cell::Cell;

use embassy_time::Duration;

use crate::config::Timing;
use crate::hal::{Color, ModeInputs, MotorCommand};
use crate::system::mode::{OperatingMode, SelectedMode};
use crate::system::state::SharedState;
use crate::task::{acquire, actuate, audio, irq, manual_override, master::MasterTask};
use crate::testing::{
    MockBumpSensor, MockButtons, MockBuzzer, MockColorLed, MockMotor, MockPort, MockStatusLed,
    MockSwitch, Sim,
};

/// One set of mock hardware, cloned into the tasks and kept by the test for inspection.
#[derive(Default)]
struct Robot {
    buttons: MockButtons,
    status_led: MockStatusLed,
    sensor: MockBumpSensor,
    port: MockPort,
    motor: MockMotor,
    led: MockColorLed,
    buzzer: MockBuzzer,
    switch: MockSwitch,
}

const BUTTON_A: ModeInputs = ModeInputs {
    interrupt_driven: true,
    polling: false,
};

const BUTTON_B: ModeInputs = ModeInputs {
    interrupt_driven: false,
    polling: true,
};

#[test]
fn button_a_then_one_bump_gives_one_maneuver() {
    let shared = SharedState::new();
    let timing = Timing::DEFAULT;
    let robot = Robot::default();
    let selected = Cell::new(None);

    let mut master = MasterTask::new();
    let mut buttons = robot.buttons.clone();
    let mut status_led = robot.status_led.clone();
    let mut sensor = robot.sensor.clone();
    let mut motor = robot.motor.clone();
    let mut led = robot.led.clone();
    let mut port = robot.port.clone();

    let mut sim = Sim::new();
    sim.spawn(async {
        let mode = master
            .run(&shared, &mut buttons, &mut status_led, &timing)
            .await;
        selected.set(mode.ok());
    });
    sim.spawn(acquire::acquisition(&shared, &mut sensor, &timing));
    sim.spawn(actuate::motor(&shared, &mut motor, &timing));
    sim.spawn(actuate::led(&shared, &mut led, &timing));

    sim.run_for(Duration::from_millis(600));
    assert_eq!(shared.mode.current(), OperatingMode::Unselected);

    robot.buttons.press(BUTTON_A);
    assert!(sim.run_until(timing.blink_period * 2, || {
        shared.mode.current() == OperatingMode::InterruptDriven
    }));
    assert!(shared.signal().is_some());
    robot.buttons.press(ModeInputs::default());

    sim.run_for(timing.settle + Duration::from_millis(10));
    assert!(sim.is_finished(0), "Master task must retire after settling");
    assert_eq!(selected.get(), Some(SelectedMode::InterruptDriven));
    assert_eq!(robot.sensor.arms(), 1);
    assert!(!robot.status_led.is_on());

    robot.port.raise(0b00_0100);
    let give = irq::on_bump_interrupt(&shared, &mut port).unwrap();
    assert!(give.woke_waiter);

    sim.run_for(timing.reverse + timing.turn + Duration::from_millis(50));
    assert_eq!(
        robot.motor.commands(),
        [
            MotorCommand::Forward(timing.cruise_speed),
            MotorCommand::Stop,
            MotorCommand::Backward(timing.maneuver_speed),
            MotorCommand::TurnLeft(timing.maneuver_speed),
            MotorCommand::Forward(timing.cruise_speed),
        ]
    );
    assert_eq!(robot.led.colors(), [Color::Blue]);
    assert_eq!(robot.sensor.reads(), 0);
}

#[test]
fn button_b_then_polled_bump_lights_the_led() {
    let shared = SharedState::new();
    let timing = Timing::DEFAULT;
    let robot = Robot::default();

    let mut master = MasterTask::new();
    let mut buttons = robot.buttons.clone();
    let mut status_led = robot.status_led.clone();
    let mut sensor = robot.sensor.clone();
    let mut motor = robot.motor.clone();
    let mut led = robot.led.clone();

    let mut sim = Sim::new();
    sim.spawn(async {
        let _ = master
            .run(&shared, &mut buttons, &mut status_led, &timing)
            .await;
    });
    sim.spawn(acquire::acquisition(&shared, &mut sensor, &timing));
    sim.spawn(actuate::motor(&shared, &mut motor, &timing));
    sim.spawn(actuate::led(&shared, &mut led, &timing));

    robot.buttons.press(BUTTON_B);
    assert!(sim.run_until(timing.blink_period * 2, || {
        shared.mode.current() == OperatingMode::Polling
    }));
    assert!(shared.signal().is_none());

    sim.run_for(Duration::from_millis(20));
    assert_eq!(robot.led.current(), Some(Color::Off));

    robot.sensor.set(0b00_0010);
    sim.run_for(timing.poll_period + timing.actuation_period * 2);
    assert_eq!(robot.led.current(), Some(Color::Green));
    assert_eq!(
        robot.motor.commands(),
        [MotorCommand::Forward(timing.cruise_speed)]
    );
    assert_eq!(robot.sensor.arms(), 0);
}

#[test]
fn no_button_keeps_the_master_blinking() {
    let shared = SharedState::new();
    let timing = Timing::DEFAULT;
    let robot = Robot::default();

    let mut master = MasterTask::new();
    let mut buttons = robot.buttons.clone();
    let mut status_led = robot.status_led.clone();
    let mut sensor = robot.sensor.clone();
    let mut motor = robot.motor.clone();
    let mut led = robot.led.clone();
    let mut port = robot.port.clone();

    let mut sim = Sim::new();
    sim.spawn(async {
        let _ = master
            .run(&shared, &mut buttons, &mut status_led, &timing)
            .await;
    });
    sim.spawn(acquire::acquisition(&shared, &mut sensor, &timing));
    sim.spawn(actuate::motor(&shared, &mut motor, &timing));
    sim.spawn(actuate::led(&shared, &mut led, &timing));

    sim.run_for(Duration::from_secs(2));
    robot.port.raise(0b00_0001);
    assert_eq!(irq::on_bump_interrupt(&shared, &mut port), None);
    sim.run_for(Duration::from_secs(1));

    assert!(!sim.is_finished(0));
    assert_eq!(shared.mode.current(), OperatingMode::Unselected);
    assert!(robot.status_led.toggles() >= 10);
    assert!(robot.motor.commands().is_empty());
    assert!(robot.led.colors().is_empty());
    assert_eq!(robot.sensor.reads(), 0);
}

fn override_pauses_the_tune(button: ModeInputs) {
    let shared = SharedState::new();
    let timing = Timing::DEFAULT;
    let robot = Robot::default();

    let mut master = MasterTask::new();
    let mut buttons = robot.buttons.clone();
    let mut status_led = robot.status_led.clone();
    let mut override_led = robot.status_led.clone();
    let mut buzzer = robot.buzzer.clone();
    let mut switch = robot.switch.clone();

    let mut sim = Sim::new();
    sim.spawn(async {
        let _ = master
            .run(&shared, &mut buttons, &mut status_led, &timing)
            .await;
    });
    sim.spawn(audio::audio(&shared.audio, &mut buzzer));
    sim.spawn(manual_override::manual_override(
        &shared,
        &mut switch,
        &mut override_led,
        &timing,
    ));

    sim.run_for(Duration::from_millis(100));
    assert!(robot.buzzer.is_sounding(), "Audio plays from boot");

    robot.buttons.press(button);
    sim.run_for(timing.blink_period + timing.settle);
    assert_ne!(shared.mode.current(), OperatingMode::Unselected);
    robot.buttons.press(ModeInputs::default());

    robot.switch.set(true);
    sim.run_for(Duration::from_millis(50));
    robot.switch.set(false);
    assert!(shared.audio.is_suspended());
    assert!(robot.status_led.is_on());

    sim.run_for(Duration::from_secs(1));
    let tones = robot.buzzer.tones();
    assert!(!robot.buzzer.is_sounding());
    sim.run_for(Duration::from_secs(2));
    assert_eq!(robot.buzzer.tones(), tones);

    robot.switch.set(true);
    sim.run_for(Duration::from_millis(50));
    assert!(!shared.audio.is_suspended());
    assert!(!robot.status_led.is_on());
    assert!(robot.buzzer.tones() > tones);
}

#[test]
fn override_pauses_the_tune_in_polling_mode() {
    override_pauses_the_tune(BUTTON_B);
}

#[test]
fn override_pauses_the_tune_in_interrupt_mode() {
    override_pauses_the_tune(BUTTON_A);
}

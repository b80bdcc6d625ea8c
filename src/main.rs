//! Robot firmware entry point
//!
//! Initializes the board and spawns the tasks. The master task and the bump interrupt task run
//! on a high priority interrupt executor, everything else on the thread executor.

#![no_std]
#![no_main]

use crate::task::{
    acquire::acquisition,
    actuate::{led, motor},
    audio::audio,
    bump_irq::bump_irq,
    manual_override::manual_override,
    master::master,
};
use embassy_executor::{InterruptExecutor, Spawner};
use embassy_rp::block::ImageDef;
use embassy_rp::config::Config;
use embassy_rp::interrupt;
use embassy_rp::interrupt::{InterruptExt, Priority};
use system::resources::{
    AssignedResources, BumpSensorResources, BuzzerResources, ModeSelectResources,
    MotorDriverResources, OverrideSwitchResources, RGBLedResources, StatusLedResources,
};
use {defmt_rtt as _, panic_probe as _};

/// Firmware image type for bootloader
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = ImageDef::secure_exe();

/// System core modules
mod system;
/// Task implementations
mod task;

/// Executor for the master and bump interrupt tasks
static EXECUTOR_HIGH: InterruptExecutor = InterruptExecutor::new();

#[interrupt]
unsafe fn SWI_IRQ_1() {
    EXECUTOR_HIGH.on_interrupt()
}

/// Firmware entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_rp::init(Config::default());

    // Split the resources into separate groups for each task
    let r = split_resources!(p);

    // The status LED is shared, set it up before any task can reach for it
    system::state::init_status_led(r.status_led);

    interrupt::SWI_IRQ_1.set_priority(Priority::P2);
    let high_spawner = EXECUTOR_HIGH.start(interrupt::SWI_IRQ_1);
    // Mode selection first; it preempts everything below until it retires
    high_spawner.spawn(master(r.mode_select)).unwrap();
    high_spawner.spawn(bump_irq()).unwrap();

    spawner.spawn(acquisition(r.bump_sensor)).unwrap();
    spawner.spawn(motor(r.motor_driver)).unwrap();
    spawner.spawn(led(r.rgb_led)).unwrap();
    spawner.spawn(manual_override(r.override_switch)).unwrap();
    spawner.spawn(audio(r.buzzer)).unwrap();
}

//! Actuation Tasks
//!
//! Motor and RGB LED, each driven by the strategy of the selected mode.

use bumper_core::task::actuate;

use crate::system::hardware::{DriveTrain, RgbLed};
use crate::system::resources::{MotorDriverResources, RGBLedResources};
use crate::system::state::{SHARED, TIMING};

#[embassy_executor::task]
pub async fn motor(r: MotorDriverResources) {
    let mut drive_train = DriveTrain::new(r).await;
    actuate::motor(&SHARED, &mut drive_train, &TIMING).await;
}

#[embassy_executor::task]
pub async fn led(r: RGBLedResources) {
    let mut led = RgbLed::new(r);
    actuate::led(&SHARED, &mut led, &TIMING).await;
}

//! Sensor Acquisition Task
//!
//! Owns the bump inputs. Polls them in polling mode; in interrupt-driven mode hands them to
//! [`crate::task::bump_irq`] and waits on the bump signal instead.

use bumper_core::task::acquire;

use crate::system::hardware::BumpPort;
use crate::system::resources::BumpSensorResources;
use crate::system::state::{SHARED, TIMING};

#[embassy_executor::task]
pub async fn acquisition(r: BumpSensorResources) {
    let mut sensor = BumpPort::new(r);
    acquire::acquisition(&SHARED, &mut sensor, &TIMING).await;
}

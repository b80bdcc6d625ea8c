//! Master Task
//!
//! Runs on the high priority executor. Selects the operating mode from the boot buttons and
//! then ends; embassy never restarts a finished task.

use bumper_core::task::master::MasterTask;
use defmt::{error, info};

use crate::system::hardware::ModeSelect;
use crate::system::resources::ModeSelectResources;
use crate::system::state::{StatusLight, SHARED, TIMING};

#[embassy_executor::task]
pub async fn master(r: ModeSelectResources) {
    let mut buttons = ModeSelect::new(r);
    let mut task = MasterTask::new();

    match task.run(&SHARED, &mut buttons, &mut StatusLight, &TIMING).await {
        Ok(mode) => info!("Running in {} mode", mode),
        Err(e) => error!("Mode selection failed: {}", e),
    }
}

//! Manual Override Task
//!
//! Pauses and resumes the audio task from the override switch.

use bumper_core::task::manual_override::manual_override as run_override;

use crate::system::hardware::Switch;
use crate::system::resources::OverrideSwitchResources;
use crate::system::state::{StatusLight, SHARED, TIMING};

#[embassy_executor::task]
pub async fn manual_override(r: OverrideSwitchResources) {
    let mut switch = Switch::new(r);
    run_override(&SHARED, &mut switch, &mut StatusLight, &TIMING).await;
}

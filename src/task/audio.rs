//! Audio Task

use bumper_core::task::audio::audio as play;

use crate::system::hardware::PwmBuzzer;
use crate::system::resources::BuzzerResources;
use crate::system::state::SHARED;

#[embassy_executor::task]
pub async fn audio(r: BuzzerResources) {
    let mut buzzer = PwmBuzzer::new(r);
    play(&SHARED.audio, &mut buzzer).await;
}

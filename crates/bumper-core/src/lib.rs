//! Task coordination core for a bump-sensing wheeled robot.
//!
//! The robot chooses one of two sensing modes at boot, by which of two buttons is held:
//! - **Polling**: the acquisition task samples the bump sensor continuously and publishes the
//!   latest reading; the actuators track it.
//! - **Interrupt driven**: a falling edge on any bump pin is captured in interrupt context and
//!   handed to the acquisition task through a binary semaphore; the actuators run a scripted
//!   response once per captured event.
//!
//! Everything here is hardware agnostic. Tasks are plain `async fn`s generic over the traits in
//! [`hal`], so the firmware wraps them in `#[embassy_executor::task]`s and the tests step them
//! on the host against mock hardware.

#![cfg_attr(not(test), no_std)]
#![deny(missing_docs)]

// must come first so the logging macros are visible in every module below
#[macro_use]
mod fmt;

pub mod config;
pub mod error;
pub mod hal;
pub mod strategy;
pub mod system;
pub mod task;

#[cfg(test)]
mod testing;

pub use config::Timing;
pub use error::Error;

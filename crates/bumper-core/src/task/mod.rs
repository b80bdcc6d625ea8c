//! Task bodies
//!
//! Each function here is the whole life of one task. The firmware spawns them, the tests
//! drive them with mock hardware.
pub mod acquire;
pub mod actuate;
pub mod audio;
pub mod irq;
pub mod manual_override;
pub mod master;

#[cfg(test)]
mod scenarios;

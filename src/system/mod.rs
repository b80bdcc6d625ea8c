//! Core system components for robot operation
pub mod hardware;
pub mod resources;
pub mod state;

//! Shared coordination state and the primitives it is built from
pub mod debounce;
pub mod event;
pub mod gate;
pub mod mode;
pub mod reading;
pub mod signal;
pub mod state;

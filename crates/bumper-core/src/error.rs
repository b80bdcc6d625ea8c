//! Error types
//!
//! The running system has no recoverable errors. These only describe attempts to repeat a
//! one-time startup step.

use core::fmt;

/// Result type for coordination operations
pub type Result<T> = core::result::Result<T, Error>;

/// Coordination errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// The operating mode was already fixed; it can only be selected once.
    ModeAlreadySelected,
    /// The bump signal already exists; it is created at most once.
    SignalAlreadyCreated,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ModeAlreadySelected => write!(f, "operating mode already selected"),
            Error::SignalAlreadyCreated => write!(f, "bump signal already created"),
        }
    }
}

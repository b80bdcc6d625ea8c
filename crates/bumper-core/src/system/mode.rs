//! Operating mode
//!
//! The mode is decided once at boot by the master task and never changes afterwards. Every
//! other task waits on [`ModeCell::wait_selected`] before doing anything mode dependent.

use embassy_sync::once_lock::OnceLock;

use crate::error::{Error, Result};

/// Operating mode as observed by any task at any time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OperatingMode {
    /// The master task has not decided yet
    Unselected,
    /// The acquisition task samples the bump sensor continuously
    Polling,
    /// Bump events arrive through the edge interrupt
    InterruptDriven,
}

/// A decided operating mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SelectedMode {
    /// See [`OperatingMode::Polling`]
    Polling,
    /// See [`OperatingMode::InterruptDriven`]
    InterruptDriven,
}

impl From<SelectedMode> for OperatingMode {
    fn from(mode: SelectedMode) -> Self {
        match mode {
            SelectedMode::Polling => OperatingMode::Polling,
            SelectedMode::InterruptDriven => OperatingMode::InterruptDriven,
        }
    }
}

/// Set-once holder of the operating mode.
pub struct ModeCell {
    mode: OnceLock<SelectedMode>,
}

impl ModeCell {
    /// Creates an unselected cell.
    pub const fn new() -> Self {
        Self {
            mode: OnceLock::new(),
        }
    }

    /// Fixes the mode. Fails without changing anything if a mode was already selected.
    pub fn select(&self, mode: SelectedMode) -> Result<()> {
        self.mode
            .init(mode)
            .map_err(|_| Error::ModeAlreadySelected)
    }

    /// Returns the current mode, [`OperatingMode::Unselected`] until the master task decides.
    pub fn current(&self) -> OperatingMode {
        self.mode
            .try_get()
            .map_or(OperatingMode::Unselected, |mode| (*mode).into())
    }

    /// Waits until a mode is selected and returns it.
    pub async fn wait_selected(&self) -> SelectedMode {
        *self.mode.get().await
    }
}

impl Default for ModeCell {
    fn default() -> Self {
        Self::new()
    }
}

//! Bump sensor readings
//!
//! The bumper has six switches, one bit per channel. Channels 0-2 sit on the right half of the
//! bumper, channels 3-5 on the left half.

use core::sync::atomic::{AtomicU32, AtomicU8, Ordering};

use crate::hal::Color;

/// Number of bump channels
pub const CHANNELS: u8 = 6;

const CHANNEL_MASK: u8 = (1 << CHANNELS) - 1;
const LEFT_MASK: u8 = 0b11_1000;

/// Side of the bumper that was hit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Side {
    /// Only channels on the left half
    Left,
    /// Anything else, including hits spanning both halves
    Right,
}

/// Snapshot of the bump channels, bit `n` set while channel `n` is pressed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorReading(u8);

impl SensorReading {
    /// No channel pressed
    pub const NONE: Self = Self(0);

    /// Builds a reading from raw bits. Bits above the last channel are dropped.
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & CHANNEL_MASK)
    }

    /// Builds a reading from active-low pin levels (`false` meaning pulled to ground).
    pub fn from_active_low(levels: [bool; CHANNELS as usize]) -> Self {
        let bits = levels
            .iter()
            .enumerate()
            .filter(|(_, high)| !**high)
            .fold(0u8, |acc, (channel, _)| acc | 1 << channel);
        Self(bits)
    }

    /// This reading with `channel` marked pressed, e.g. the channel whose edge raised an
    /// interrupt but has since been released. Channels out of range are ignored.
    pub const fn with_channel(self, channel: u8) -> Self {
        if channel < CHANNELS {
            Self(self.0 | 1 << channel)
        } else {
            self
        }
    }

    /// Raw bits
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Returns `true` if channel `n` is pressed.
    pub const fn is_pressed(self, channel: u8) -> bool {
        channel < CHANNELS && self.0 & (1 << channel) != 0
    }

    /// Returns `true` if any channel is pressed.
    pub const fn any(self) -> bool {
        self.0 != 0
    }

    /// Which half of the bumper was hit, `None` if nothing is pressed.
    pub const fn side(self) -> Option<Side> {
        if self.0 == 0 {
            None
        } else if self.0 & !LEFT_MASK == 0 {
            Some(Side::Left)
        } else {
            Some(Side::Right)
        }
    }

    /// Indicator colour for this reading.
    ///
    /// Each channel has its own colour; several channels at once show white.
    pub const fn color(self) -> Color {
        match self.0 {
            0 => Color::Off,
            0b00_0001 => Color::Red,
            0b00_0010 => Color::Green,
            0b00_0100 => Color::Blue,
            0b00_1000 => Color::Yellow,
            0b01_0000 => Color::SkyBlue,
            0b10_0000 => Color::Pink,
            _ => Color::White,
        }
    }
}

/// Latest polled reading, shared between the acquisition task and the actuators.
///
/// Written with `Release` and read with `Acquire`: a reader sees a complete snapshot, possibly
/// one sample behind the hardware.
pub struct ReadingCell {
    bits: AtomicU8,
    samples: AtomicU32,
}

impl ReadingCell {
    /// Creates a cell holding [`SensorReading::NONE`] with no samples taken.
    pub const fn new() -> Self {
        Self {
            bits: AtomicU8::new(0),
            samples: AtomicU32::new(0),
        }
    }

    /// Stores a fresh sample.
    pub fn publish(&self, reading: SensorReading) {
        self.bits.store(reading.bits(), Ordering::Release);
        self.samples.fetch_add(1, Ordering::Release);
    }

    /// Most recently published reading
    pub fn latest(&self) -> SensorReading {
        SensorReading::from_bits(self.bits.load(Ordering::Acquire))
    }

    /// Number of samples published so far, wrapping.
    pub fn samples(&self) -> u32 {
        self.samples.load(Ordering::Acquire)
    }
}

impl Default for ReadingCell {
    fn default() -> Self {
        Self::new()
    }
}

//! Hardware interface traits
//!
//! The coordination core only talks to the board through these traits. All output calls are
//! fire-and-forget: implementations swallow driver errors, the core never consults a status.

use crate::system::reading::SensorReading;

/// Command for the drive motors.
///
/// Speeds are percentages (0-100).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotorCommand {
    /// Both motors forward
    Forward(u8),
    /// Both motors backward
    Backward(u8),
    /// Turn left in place
    TurnLeft(u8),
    /// Turn right in place
    TurnRight(u8),
    /// Stop both motors
    Stop,
}

/// Colours the RGB indicator can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Color {
    /// All channels off
    Off,
    /// Red only
    Red,
    /// Green only
    Green,
    /// Red and green
    Yellow,
    /// Blue only
    Blue,
    /// Red and blue
    Pink,
    /// Green and blue
    SkyBlue,
    /// All channels on
    White,
}

impl Color {
    /// Returns the (red, green, blue) channel levels of this colour.
    pub const fn channels(self) -> (bool, bool, bool) {
        match self {
            Color::Off => (false, false, false),
            Color::Red => (true, false, false),
            Color::Green => (false, true, false),
            Color::Yellow => (true, true, false),
            Color::Blue => (false, false, true),
            Color::Pink => (true, false, true),
            Color::SkyBlue => (false, true, true),
            Color::White => (true, true, true),
        }
    }
}

/// Logical state of the two mode-select buttons, `true` meaning pressed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ModeInputs {
    /// Button selecting interrupt-driven sensing
    pub interrupt_driven: bool,
    /// Button selecting polled sensing
    pub polling: bool,
}

/// Drive motors
pub trait Motor {
    /// Applies a drive command.
    fn drive(&mut self, command: MotorCommand);
}

/// RGB indicator LED
pub trait ColorLed {
    /// Shows a colour.
    fn set_color(&mut self, color: Color);
}

/// Single-colour status LED
pub trait StatusLed {
    /// Switches the LED on or off.
    fn set(&mut self, on: bool);
    /// Inverts the LED.
    fn toggle(&mut self);
}

/// The two mode-select buttons
pub trait ModeButtons {
    /// Samples both buttons. Active-low wiring is resolved by the implementation.
    fn sample(&mut self) -> ModeInputs;
}

/// Bump sensor read as a level snapshot
pub trait BumpSensor {
    /// Reads the raw state of every bump channel, pressed channels set.
    fn read(&mut self) -> SensorReading;
}

/// Edge interrupt configuration of the bump sensor lines
pub trait EdgeTrigger {
    /// Enables falling-edge interrupts on every bump channel. Called once.
    fn arm(&mut self);
}

/// Interrupt status access, used only from interrupt context
pub trait InterruptPort {
    /// Reads which channels raised the interrupt.
    fn status(&mut self) -> SensorReading;
    /// Clears the pending interrupt flags so the line is re-armed.
    fn clear(&mut self);
}

/// Audio output
pub trait Buzzer {
    /// Starts a square wave at the given frequency.
    fn tone(&mut self, frequency_hz: u32);
    /// Stops any sound.
    fn silence(&mut self);
}

/// Manual override switch
pub trait OverrideSwitch {
    /// Returns `true` while the switch is pressed.
    fn is_on(&mut self) -> bool;
}

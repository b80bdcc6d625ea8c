//! Board drivers
//!
//! Implements the `bumper_core::hal` traits on top of embassy-rp GPIO and PWM and the
//! TB6612FNG driver crate.

use bumper_core::hal::{
    BumpSensor, Buzzer, Color, ColorLed, EdgeTrigger, InterruptPort, ModeButtons, ModeInputs,
    Motor, MotorCommand, OverrideSwitch,
};
use bumper_core::system::reading::{SensorReading, CHANNELS};
use defmt::warn;
use embassy_futures::select::select_array;
use embassy_rp::gpio::{self, Input, Level, Output, Pull};
use embassy_rp::pwm::{self, Pwm, SetDutyCycle};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embassy_time::{Duration, Timer};
use tb6612fng::{DriveCommand, Motor as DriverMotor, Tb6612fng};

use crate::system::resources::{
    BumpSensorResources, BuzzerResources, ModeSelectResources, MotorDriverResources,
    OverrideSwitchResources, RGBLedResources,
};

/// PWM configuration for `desired_freq_hz` at the current system clock.
pub fn pwm_config(desired_freq_hz: u32) -> pwm::Config {
    let clock_freq_hz = embassy_rp::clocks::clk_sys_freq(); // 150MHz

    // Calculate minimum divider needed to keep period under 16-bit limit (65535)
    let divider = ((clock_freq_hz / desired_freq_hz) / 65535 + 1) as u8;
    let period = (clock_freq_hz / (desired_freq_hz * divider as u32)) as u16 - 1;

    let mut config = pwm::Config::default();
    config.divider = divider.into();
    config.top = period;
    config
}

/// Mode select buttons
pub struct ModeSelect {
    interrupt_driven: Input<'static>,
    polling: Input<'static>,
}

impl ModeSelect {
    pub fn new(r: ModeSelectResources) -> Self {
        Self {
            interrupt_driven: Input::new(r.interrupt_driven_pin, Pull::Down),
            polling: Input::new(r.polling_pin, Pull::Down),
        }
    }
}

impl ModeButtons for ModeSelect {
    fn sample(&mut self) -> ModeInputs {
        ModeInputs {
            interrupt_driven: self.interrupt_driven.is_high(),
            polling: self.polling.is_high(),
        }
    }
}

/// Manual override switch
pub struct Switch(Input<'static>);

impl Switch {
    pub fn new(r: OverrideSwitchResources) -> Self {
        Self(Input::new(r.switch_pin, Pull::Down))
    }
}

impl OverrideSwitch for Switch {
    fn is_on(&mut self) -> bool {
        self.0.is_high()
    }
}

/// The six bump inputs
pub struct BumpInputs([Input<'static>; CHANNELS as usize]);

impl BumpInputs {
    pub fn new(r: BumpSensorResources) -> Self {
        Self([
            Input::new(r.channel_0, Pull::Up),
            Input::new(r.channel_1, Pull::Up),
            Input::new(r.channel_2, Pull::Up),
            Input::new(r.channel_3, Pull::Up),
            Input::new(r.channel_4, Pull::Up),
            Input::new(r.channel_5, Pull::Up),
        ])
    }

    /// Current levels as a reading; a pressed switch pulls its line low.
    pub fn reading(&self) -> SensorReading {
        SensorReading::from_active_low(core::array::from_fn(|channel| self.0[channel].is_high()))
    }

    /// Waits for a falling edge on any channel and returns that channel.
    pub async fn wait_for_bump(&mut self) -> usize {
        let (_, channel) =
            select_array(self.0.each_mut().map(|input| input.wait_for_falling_edge())).await;
        channel
    }
}

/// Bump inputs handed from the acquisition task to the bump interrupt task when interrupt-driven
/// mode arms the edge interrupt.
pub static ARMED_INPUTS: Signal<CriticalSectionRawMutex, BumpInputs> = Signal::new();

/// Bump sensor as seen by the acquisition task
pub struct BumpPort {
    inputs: Option<BumpInputs>,
}

impl BumpPort {
    pub fn new(r: BumpSensorResources) -> Self {
        Self {
            inputs: Some(BumpInputs::new(r)),
        }
    }
}

impl BumpSensor for BumpPort {
    fn read(&mut self) -> SensorReading {
        self.inputs
            .as_ref()
            .map_or(SensorReading::NONE, BumpInputs::reading)
    }
}

impl EdgeTrigger for BumpPort {
    fn arm(&mut self) {
        match self.inputs.take() {
            Some(inputs) => ARMED_INPUTS.signal(inputs),
            None => warn!("Bump edge interrupt already armed"),
        }
    }
}

/// Interrupt view of the bump inputs after an edge on `fired`
///
/// The GPIO driver acknowledges the edge before it wakes the waiting task, so there is no flag
/// left to clear. Status is the channel whose edge fired, plus any channel still held low at
/// handling time; a bump released before the handler ran still reports its channel.
pub struct EdgeLatch<'a> {
    inputs: &'a BumpInputs,
    fired: usize,
}

impl<'a> EdgeLatch<'a> {
    pub fn new(inputs: &'a BumpInputs, fired: usize) -> Self {
        Self { inputs, fired }
    }
}

impl InterruptPort for EdgeLatch<'_> {
    fn status(&mut self) -> SensorReading {
        self.inputs.reading().with_channel(self.fired as u8)
    }

    fn clear(&mut self) {}
}

/// Common cathode RGB LED on three GPIOs
pub struct RgbLed {
    red: Output<'static>,
    green: Output<'static>,
    blue: Output<'static>,
}

impl RgbLed {
    pub fn new(r: RGBLedResources) -> Self {
        Self {
            red: Output::new(r.red_pin, Level::Low),
            green: Output::new(r.green_pin, Level::Low),
            blue: Output::new(r.blue_pin, Level::Low),
        }
    }
}

impl ColorLed for RgbLed {
    fn set_color(&mut self, color: Color) {
        let (red, green, blue) = color.channels();
        self.red.set_level(Level::from(red));
        self.green.set_level(Level::from(green));
        self.blue.set_level(Level::from(blue));
    }
}

type Driver = Tb6612fng<
    Output<'static>,
    Output<'static>,
    Pwm<'static>,
    Output<'static>,
    Output<'static>,
    Pwm<'static>,
    Output<'static>,
>;

/// Both drive motors behind the TB6612FNG, motor A left and motor B right
pub struct DriveTrain {
    control: Driver,
}

impl DriveTrain {
    /// Sets up the driver and wakes it from standby.
    pub async fn new(r: MotorDriverResources) -> Self {
        // We use 10kHz frequency as cheaper DC motors often work better at lower frequencies
        let pwm_config = pwm_config(10_000);

        let stby = gpio::Output::new(r.standby_pin, gpio::Level::Low);

        let left_fwd = gpio::Output::new(r.left_forward_pin, gpio::Level::Low);
        let left_bckw = gpio::Output::new(r.left_backward_pin, gpio::Level::Low);
        let left_pwm = pwm::Pwm::new_output_a(r.left_slice, r.left_pwm_pin, pwm_config.clone());
        let left_motor = DriverMotor::new(left_fwd, left_bckw, left_pwm).unwrap();

        let right_fwd = gpio::Output::new(r.right_forward_pin, gpio::Level::Low);
        let right_bckw = gpio::Output::new(r.right_backward_pin, gpio::Level::Low);
        let right_pwm = pwm::Pwm::new_output_b(r.right_slice, r.right_pwm_pin, pwm_config);
        let right_motor = DriverMotor::new(right_fwd, right_bckw, right_pwm).unwrap();

        let mut control = Tb6612fng::new(left_motor, right_motor, stby).unwrap();
        control.disable_standby().unwrap();
        Timer::after(Duration::from_millis(100)).await;

        Self { control }
    }

    fn set(&mut self, left: DriveCommand, right: DriveCommand) {
        let left = self.control.motor_a.drive(left);
        let right = self.control.motor_b.drive(right);
        if left.is_err() || right.is_err() {
            warn!("Motor driver rejected a command");
        }
    }
}

impl Motor for DriveTrain {
    fn drive(&mut self, command: MotorCommand) {
        match command {
            MotorCommand::Forward(speed) => {
                self.set(DriveCommand::Forward(speed), DriveCommand::Forward(speed))
            }
            MotorCommand::Backward(speed) => {
                self.set(DriveCommand::Backward(speed), DriveCommand::Backward(speed))
            }
            // turn in place
            MotorCommand::TurnLeft(speed) => {
                self.set(DriveCommand::Backward(speed), DriveCommand::Forward(speed))
            }
            MotorCommand::TurnRight(speed) => {
                self.set(DriveCommand::Forward(speed), DriveCommand::Backward(speed))
            }
            MotorCommand::Stop => self.set(DriveCommand::Stop, DriveCommand::Stop),
        }
    }
}

/// Piezo buzzer on one PWM channel, 50% duty while sounding
pub struct PwmBuzzer(Pwm<'static>);

impl PwmBuzzer {
    pub fn new(r: BuzzerResources) -> Self {
        let mut pwm = pwm::Pwm::new_output_a(r.pwm_slice, r.pwm_pin, pwm::Config::default());
        let _ = pwm.set_duty_cycle_fully_off();
        Self(pwm)
    }
}

impl Buzzer for PwmBuzzer {
    fn tone(&mut self, frequency_hz: u32) {
        let mut config = pwm_config(frequency_hz);
        config.compare_a = config.top / 2;
        self.0.set_config(&config);
    }

    fn silence(&mut self) {
        let _ = self.0.set_duty_cycle_fully_off();
    }
}

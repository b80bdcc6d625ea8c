//! Hardware Resource Management
//!
//! Allocates the robot's pins and peripherals to the tasks that own them. Each group below
//! is moved into exactly one task, except the status LED, which the master task and the
//! override task share through [`crate::system::state`].
//!
//! # Resource Groups
//! - Mode Select: the two boot-time buttons
//! - Status LED: on-board LED used by the master and override tasks
//! - Override Switch: manual audio override push switch
//! - Bump Sensor: six active-low microswitches
//! - RGB LED: bump indicator
//! - Motor Control: TB6612FNG dual motor driver pins and PWM channels
//! - Buzzer: PWM driven piezo

use assign_resources::assign_resources;
use embassy_rp::peripherals;

assign_resources! {
    /// Boot-time mode select buttons, active high
    mode_select: ModeSelectResources {
        interrupt_driven_pin: PIN_16,
        polling_pin: PIN_17,
    },
    /// On-board status LED
    status_led: StatusLedResources {
        led_pin: PIN_25,
    },
    /// Manual audio override switch, active high
    override_switch: OverrideSwitchResources {
        switch_pin: PIN_15,
    },
    /// Bump microswitches, channel 0 first. Channels 0-2 sit on the right half of the bumper,
    /// 3-5 on the left.
    bump_sensor: BumpSensorResources {
        channel_0: PIN_6,
        channel_1: PIN_7,
        channel_2: PIN_8,
        channel_3: PIN_9,
        channel_4: PIN_12,
        channel_5: PIN_13,
    },
    /// RGB bump indicator, common cathode
    rgb_led: RGBLedResources {
        red_pin: PIN_2,
        green_pin: PIN_3,
        blue_pin: PIN_4,
    },
    /// TB6612FNG dual motor driver pins and PWM channels
    motor_driver: MotorDriverResources {
        standby_pin: PIN_22,
        // Motor drive PWM
        left_slice: PWM_SLICE6,
        left_pwm_pin: PIN_28,
        left_forward_pin: PIN_21,
        left_backward_pin: PIN_20,
        // Motor drive PWM
        right_slice: PWM_SLICE5,
        right_pwm_pin: PIN_27,
        right_forward_pin: PIN_19,
        right_backward_pin: PIN_18,
    },
    /// Piezo buzzer
    buzzer: BuzzerResources {
        pwm_slice: PWM_SLICE0,
        pwm_pin: PIN_0,
    },
}

//! Hardware Resource Management
//!
//! Assigns the RP2350 pins and peripherals used by the trash can. Everything
//! goes to the single lid control task, nothing is shared.
//!
//! # Resource Groups
//! - Distance Sensor: HC-SR04 ultrasonic sensor pins
//! - Lid Servo: SG90 signal pin, driven by PIO0
//! - Buzzer: active piezo buzzer supply pin

use assign_resources::assign_resources;
use embassy_rp::bind_interrupts;
use embassy_rp::peripherals::{self, PIO0};
use embassy_rp::pio::InterruptHandler as PioInterruptHandler;

assign_resources! {
    /// HC-SR04 ultrasonic distance sensor pins
    distance_sensor: DistanceSensorResources {
       trigger_pin: PIN_7,
       echo_pin: PIN_6, // via 5V -> 3.3V voltage divider
    },
    /// Servo moving the lid hinge
    lid_servo: LidServoResources {
        pin: PIN_8,
        pio: PIO0,
    },
    /// Piezo buzzer for open/close alerts
    buzzer: BuzzerResources {
        pin: PIN_11,
    },
}

bind_interrupts!(pub struct Irqs {
    PIO0_IRQ_0 => PioInterruptHandler<PIO0>;
});

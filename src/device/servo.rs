//! Lid Servo
//!
//! Drives the SG90 hinge servo. The RP2350 PWM slices stay free for other use,
//! the 50 Hz servo signal comes from a PIO state machine running the embassy
//! PWM program instead.

use core::convert::Infallible;
use core::time::Duration;
use defmt::trace;
use embassy_rp::pio::Instance;
use embassy_rp::pio_programs::pwm::PioPwm;
use lid_core::{Actuator, Angle};

const DEFAULT_MIN_PULSE_WIDTH: u64 = 500; // SG90 at 0 degrees (us)
const DEFAULT_MAX_PULSE_WIDTH: u64 = 2400; // SG90 at 180 degrees (us)
const DEFAULT_MAX_DEGREE_ROTATION: u8 = 180;
const REFRESH_INTERVAL: u64 = 20000; // The period of each cycle (us)

pub struct ServoBuilder<'d, T: Instance, const SM: usize> {
    pwm: PioPwm<'d, T, SM>,
    period: Duration,
    min_pulse_width: Duration,
    max_pulse_width: Duration,
    max_degree_rotation: u8,
}

impl<'d, T: Instance, const SM: usize> ServoBuilder<'d, T, SM> {
    pub fn new(pwm: PioPwm<'d, T, SM>) -> Self {
        Self {
            pwm,
            period: Duration::from_micros(REFRESH_INTERVAL),
            min_pulse_width: Duration::from_micros(DEFAULT_MIN_PULSE_WIDTH),
            max_pulse_width: Duration::from_micros(DEFAULT_MAX_PULSE_WIDTH),
            max_degree_rotation: DEFAULT_MAX_DEGREE_ROTATION,
        }
    }

    pub fn set_min_pulse_width(mut self, duration: Duration) -> Self {
        self.min_pulse_width = duration;
        self
    }

    pub fn set_max_pulse_width(mut self, duration: Duration) -> Self {
        self.max_pulse_width = duration;
        self
    }

    pub fn set_max_degree_rotation(mut self, degree: u8) -> Self {
        self.max_degree_rotation = degree;
        self
    }

    /// Programs the signal period and starts the output
    pub fn build(mut self) -> LidServo<'d, T, SM> {
        self.pwm.set_period(self.period);
        self.pwm.start();
        LidServo {
            pwm: self.pwm,
            min_pulse_width: self.min_pulse_width,
            max_pulse_width: self.max_pulse_width,
            max_degree_rotation: self.max_degree_rotation,
        }
    }
}

pub struct LidServo<'d, T: Instance, const SM: usize> {
    pwm: PioPwm<'d, T, SM>,
    min_pulse_width: Duration,
    max_pulse_width: Duration,
    max_degree_rotation: u8,
}

impl<'d, T: Instance, const SM: usize> LidServo<'d, T, SM> {
    /// Pulse width for an angle, clamped to the servo's range
    fn pulse_width(&self, degree: Angle) -> Duration {
        let degree = degree.min(self.max_degree_rotation) as u64;
        let min = self.min_pulse_width.as_nanos() as u64;
        let max = self.max_pulse_width.as_nanos() as u64;
        let nanos_per_degree = max.saturating_sub(min) / self.max_degree_rotation.max(1) as u64;
        Duration::from_nanos(min + degree * nanos_per_degree).min(self.max_pulse_width)
    }
}

impl<'d, T: Instance, const SM: usize> Actuator for LidServo<'d, T, SM> {
    type Error = Infallible;

    fn move_to(&mut self, angle: Angle) -> Result<(), Infallible> {
        let duration = self.pulse_width(angle);
        trace!("degree {} duration {}", angle, duration.as_micros() as u64);
        self.pwm.write(duration);
        Ok(())
    }
}

//! Lid Configuration
//!
//! All tunables of the lid controller. Defaults match the SG90 servo mounted
//! on the swivel lid and an HC-SR04 looking up from the rim.
//!
//! A configuration is checked once when the controller is created; an invalid
//! one never reaches the control loop.

use core::fmt;

use embassy_time::Duration;

use crate::Angle;

/// Highest angle a hobby servo can be commanded to
pub const MAX_ANGLE: Angle = 180;

const DEFAULT_CLOSED_ANGLE: Angle = 60;
const DEFAULT_OPEN_ANGLE: Angle = 125;
const DEFAULT_STEP: Angle = 2;
const DEFAULT_DISTANCE_THRESHOLD: f64 = 10.0;
const DEFAULT_LID_TIMEOUT: Duration = Duration::from_millis(3000);
const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(500);
const DEFAULT_STEP_DELAY: Duration = Duration::from_millis(15);

/// Lid controller settings
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LidConfig {
    /// Servo angle with the lid fully closed
    pub closed_angle: Angle,
    /// Servo angle with the lid fully open
    pub open_angle: Angle,
    /// Degrees moved per sweep step
    pub step: Angle,
    /// An object at or below this distance (cm) opens the lid
    pub distance_threshold: f64,
    /// Time without a detection before the lid closes
    pub lid_timeout: Duration,
    /// Time between two proximity ticks
    pub poll_interval: Duration,
    /// Settle time after each sweep step
    pub step_delay: Duration,
}

impl Default for LidConfig {
    fn default() -> Self {
        Self {
            closed_angle: DEFAULT_CLOSED_ANGLE,
            open_angle: DEFAULT_OPEN_ANGLE,
            step: DEFAULT_STEP,
            distance_threshold: DEFAULT_DISTANCE_THRESHOLD,
            lid_timeout: DEFAULT_LID_TIMEOUT,
            poll_interval: DEFAULT_POLL_INTERVAL,
            step_delay: DEFAULT_STEP_DELAY,
        }
    }
}

impl LidConfig {
    pub fn set_closed_angle(mut self, angle: Angle) -> Self {
        self.closed_angle = angle;
        self
    }

    pub fn set_open_angle(mut self, angle: Angle) -> Self {
        self.open_angle = angle;
        self
    }

    pub fn set_step(mut self, step: Angle) -> Self {
        self.step = step;
        self
    }

    pub fn set_distance_threshold(mut self, centimeters: f64) -> Self {
        self.distance_threshold = centimeters;
        self
    }

    pub fn set_lid_timeout(mut self, timeout: Duration) -> Self {
        self.lid_timeout = timeout;
        self
    }

    pub fn set_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    pub fn set_step_delay(mut self, delay: Duration) -> Self {
        self.step_delay = delay;
        self
    }

    /// Checks the settings for consistency
    ///
    /// The open angle has to lie above the closed angle, both within the servo
    /// range, the step must move the lid and the threshold must be a real,
    /// nonnegative distance.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for angle in [self.closed_angle, self.open_angle] {
            if angle > MAX_ANGLE {
                return Err(ConfigError::AngleOutOfRange(angle));
            }
        }
        if self.open_angle <= self.closed_angle {
            return Err(ConfigError::InvalidTravel {
                closed: self.closed_angle,
                open: self.open_angle,
            });
        }
        if self.step == 0 {
            return Err(ConfigError::ZeroStep);
        }
        // NaN fails this comparison as well
        if !(self.distance_threshold >= 0.0) {
            return Err(ConfigError::InvalidThreshold);
        }
        if self.poll_interval.as_ticks() == 0 {
            return Err(ConfigError::ZeroPollInterval);
        }
        Ok(())
    }
}

/// Rejected configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Open angle is not above the closed angle
    InvalidTravel { closed: Angle, open: Angle },
    /// Angle beyond the servo range
    AngleOutOfRange(Angle),
    /// Sweep step of zero degrees
    ZeroStep,
    /// Negative or NaN trigger distance
    InvalidThreshold,
    /// Polling without a pause between ticks
    ZeroPollInterval,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTravel { closed, open } => write!(
                f,
                "open angle {} must be greater than closed angle {}",
                open, closed
            ),
            ConfigError::AngleOutOfRange(angle) => {
                write!(f, "angle {} exceeds servo range of {} degrees", angle, MAX_ANGLE)
            }
            ConfigError::ZeroStep => f.write_str("sweep step must be at least one degree"),
            ConfigError::InvalidThreshold => {
                f.write_str("distance threshold must be a nonnegative number")
            }
            ConfigError::ZeroPollInterval => f.write_str("poll interval must not be zero"),
        }
    }
}

impl core::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = LidConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.closed_angle, 60);
        assert_eq!(config.open_angle, 125);
        assert_eq!(config.lid_timeout, Duration::from_millis(3000));
    }

    #[test]
    fn open_must_be_above_closed() {
        let config = LidConfig::default().set_open_angle(60);
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidTravel {
                closed: 60,
                open: 60
            })
        );

        let config = LidConfig::default().set_closed_angle(130);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidTravel { .. })
        ));
    }

    #[test]
    fn rejects_angles_past_servo_range() {
        let config = LidConfig::default().set_open_angle(181);
        assert_eq!(config.validate(), Err(ConfigError::AngleOutOfRange(181)));
    }

    #[test]
    fn rejects_zero_step() {
        let config = LidConfig::default().set_step(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroStep));
    }

    #[test]
    fn rejects_negative_or_nan_threshold() {
        let config = LidConfig::default().set_distance_threshold(-1.0);
        assert_eq!(config.validate(), Err(ConfigError::InvalidThreshold));

        let config = LidConfig::default().set_distance_threshold(f64::NAN);
        assert_eq!(config.validate(), Err(ConfigError::InvalidThreshold));

        let config = LidConfig::default().set_distance_threshold(0.0);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn rejects_zero_poll_interval() {
        let config = LidConfig::default().set_poll_interval(Duration::from_ticks(0));
        assert_eq!(config.validate(), Err(ConfigError::ZeroPollInterval));
    }

    #[test]
    fn errors_render_readable_messages() {
        let message = ConfigError::InvalidTravel { closed: 90, open: 45 }.to_string();
        assert_eq!(message, "open angle 45 must be greater than closed angle 90");
    }
}

//! Lid settings for this build
//!
//! Angles are for an SG90 on the swivel lid hinge, the threshold for an
//! HC-SR04 looking up from under the rim. Values are checked once at start-up.

use embassy_time::Duration;
use lid_core::{Angle, LidConfig};

/// Servo angle with the lid fully closed
const CLOSED_ANGLE: Angle = 60;

/// Servo angle with the lid fully open
const OPEN_ANGLE: Angle = 125;

/// Degrees per sweep step
const SERVO_STEP: Angle = 2;

/// Distance of the hand from the sensor that opens the lid (cm)
const DISTANCE_THRESHOLD: f64 = 10.0;

/// Lid auto-closes after this time without a hand in range
const LID_TIMEOUT: Duration = Duration::from_millis(3000);

/// Time between two proximity measurements
const POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Time for the servo to reach each sweep step
const STEP_DELAY: Duration = Duration::from_millis(15);

/// Builds the lid configuration from the constants above
pub fn lid_config() -> LidConfig {
    LidConfig::default()
        .set_closed_angle(CLOSED_ANGLE)
        .set_open_angle(OPEN_ANGLE)
        .set_step(SERVO_STEP)
        .set_distance_threshold(DISTANCE_THRESHOLD)
        .set_lid_timeout(LID_TIMEOUT)
        .set_poll_interval(POLL_INTERVAL)
        .set_step_delay(STEP_DELAY)
}

//! Hardware Seams
//!
//! Capabilities the lid controller needs from the board. The firmware
//! implements them on top of embassy-rp, the tests with simulated parts.
//! Step pacing uses [`embedded_hal_async::delay::DelayNs`] directly.

// All implementations run on the single control task, `Send` bounds would
// only get in the way.
#![allow(async_fn_in_trait)]

use embassy_time::Instant;

use crate::alert::AlertPattern;
use crate::Angle;

/// Distance sensor in front of the lid
pub trait RangeSensor {
    /// Takes one sample in centimeters.
    ///
    /// Returns `None` when no echo came back within the sensor's bounded wait.
    /// Must never block indefinitely.
    async fn measure(&mut self) -> Option<f64>;
}

/// Hinge actuator moving the lid
pub trait Actuator {
    type Error;

    /// Commands the actuator toward an absolute angle.
    ///
    /// Returns as soon as the command is issued, the caller waits for the
    /// actuator to settle.
    fn move_to(&mut self, angle: Angle) -> Result<(), Self::Error>;
}

/// Audible feedback
pub trait AlertSignal {
    /// Plays a pattern and returns once it finished.
    async fn play(&mut self, pattern: AlertPattern);
}

/// Monotonic time source
pub trait Clock {
    fn now(&self) -> Instant;
}

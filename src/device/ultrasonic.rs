//! Proximity sensing
//!
//! Measures the distance to a hand above the lid with an HC-SR04 ultrasonic
//! sensor.
//!
//! # Sensor Operation
//! - Async HC-SR04 driver, one measurement per controller tick
//! - Distance reported in centimeters
//! - Assumes fixed ambient temperature of 21.5°C
//! - Each measurement is bounded by [`ECHO_TIMEOUT`], no echo means no object
//!
//! # Signal Processing
//! Valid samples go through a [`DistanceFilter`] (median of the last three).
//! A failed or timed-out measurement clears the filter, so readings from
//! before a gap never decide about the lid after it.

use crate::device::clock::SystemClock;
use defmt::{debug, info};
use embassy_rp::gpio::{Input, Output};
use embassy_time::{with_timeout, Delay, Duration};
use hcsr04_async::{Config, DistanceUnit, Hcsr04, TemperatureUnit};
use lid_core::{DistanceFilter, RangeSensor};

/// Fixed ambient temperature for distance calculations
const TEMPERATURE: f64 = 21.5;

/// Longest wait for an echo. Sound travels roughly 10 m in this time, far
/// beyond the sensor's 4.5 m range.
const ECHO_TIMEOUT: Duration = Duration::from_millis(60);

/// HC-SR04 with median filtering
pub struct UltrasonicSensor {
    sensor: Hcsr04<Output<'static>, Input<'static>, SystemClock, Delay>,
    filter: DistanceFilter,
}

impl UltrasonicSensor {
    pub fn new(trigger: Output<'static>, echo: Input<'static>) -> Self {
        let config = Config {
            distance_unit: DistanceUnit::Centimeters,
            temperature_unit: TemperatureUnit::Celsius,
        };
        Self {
            sensor: Hcsr04::new(trigger, echo, config, SystemClock, Delay),
            filter: DistanceFilter::new(),
        }
    }
}

impl RangeSensor for UltrasonicSensor {
    async fn measure(&mut self) -> Option<f64> {
        let sample = match with_timeout(ECHO_TIMEOUT, self.sensor.measure(TEMPERATURE)).await {
            Ok(Ok(distance_cm)) => Some(distance_cm),
            Ok(Err(_)) => None,
            Err(_) => {
                debug!("echo wait timed out after {} ms", ECHO_TIMEOUT.as_millis());
                None
            }
        };

        let filtered_distance = self.filter.update(sample);
        match filtered_distance {
            Some(distance_cm) => info!("Distance: {}", distance_cm),
            None => info!("Distance: no echo"),
        }
        filtered_distance
    }
}

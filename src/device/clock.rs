//! Time source backed by the embassy time driver

use embassy_time::Instant;
use hcsr04_async::Now;
use lid_core::Clock;

/// Monotonic clock of the RP2350 timer
#[derive(Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

impl Now for SystemClock {
    fn now_micros(&self) -> u64 {
        Instant::now().as_micros()
    }
}

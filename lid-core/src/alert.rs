//! Buzzer Patterns
//!
//! Audible feedback is a short chirp when the lid opens and three rattling
//! bursts as a warning before it closes. The patterns are plain data so the
//! buzzer driver only has to toggle a pin accordingly.

use embassy_time::Duration;

/// A run of on/off cycles followed by a pause
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Burst {
    /// Number of on/off cycles
    pub cycles: u8,
    /// Time the buzzer is driven per cycle
    pub high: Duration,
    /// Time the buzzer is released per cycle
    pub low: Duration,
    /// Silence after the last cycle
    pub pause: Duration,
}

impl Burst {
    const fn new(cycles: u8, high_ms: u64, low_ms: u64, pause_ms: u64) -> Self {
        Self {
            cycles,
            high: Duration::from_millis(high_ms),
            low: Duration::from_millis(low_ms),
            pause: Duration::from_millis(pause_ms),
        }
    }

    /// Total time spent playing this burst, pause included
    pub fn duration(&self) -> Duration {
        (self.high + self.low) * self.cycles as u32 + self.pause
    }
}

const OPEN_CHIRP: [Burst; 1] = [Burst::new(31, 5, 1, 0)];

const CLOSE_WARNING: [Burst; 3] = [
    Burst::new(21, 5, 2, 50),
    Burst::new(21, 5, 2, 50),
    Burst::new(21, 5, 2, 0),
];

/// Sound played on a lid transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AlertPattern {
    /// Played right before the lid opens
    OpenChirp,
    /// Played right before the lid closes
    CloseWarning,
}

impl AlertPattern {
    /// The bursts making up this pattern, in playing order
    pub fn bursts(self) -> &'static [Burst] {
        match self {
            AlertPattern::OpenChirp => &OPEN_CHIRP,
            AlertPattern::CloseWarning => &CLOSE_WARNING,
        }
    }

    /// Total playing time of the pattern
    pub fn duration(self) -> Duration {
        self.bursts()
            .iter()
            .fold(Duration::from_ticks(0), |total, burst| total + burst.duration())
    }
}

//! Distance Filtering
//!
//! A moving median over the last few valid samples suppresses single spikes
//! (a stray reflection off the lid edge) that would otherwise open the lid.
//!
//! A sample without echo clears the window. Readings on either side of a gap
//! are never mixed, so old near readings cannot outvote a fresh far one.

use moving_median::MovingMedian;

/// Size of median filter window
pub const MEDIAN_WINDOW_SIZE: usize = 3;

/// Median of the recent valid distance samples
pub struct DistanceFilter {
    median_filter: MovingMedian<f64, MEDIAN_WINDOW_SIZE>,
}

impl Default for DistanceFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl DistanceFilter {
    pub fn new() -> Self {
        Self {
            median_filter: MovingMedian::<f64, MEDIAN_WINDOW_SIZE>::new(),
        }
    }

    /// Feeds one sample and returns the filtered distance.
    ///
    /// `None` (no echo) resets the window and passes through unchanged.
    pub fn update(&mut self, sample: Option<f64>) -> Option<f64> {
        match sample {
            Some(distance_cm) => {
                self.median_filter.add_value(distance_cm);
                Some(self.median_filter.median())
            }
            None => {
                self.reset();
                None
            }
        }
    }

    /// Forgets all samples
    pub fn reset(&mut self) {
        self.median_filter = MovingMedian::<f64, MEDIAN_WINDOW_SIZE>::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_sample_passes_through() {
        let mut filter = DistanceFilter::new();
        assert_eq!(filter.update(Some(42.0)), Some(42.0));
    }

    #[test]
    fn single_spike_is_suppressed() {
        let mut filter = DistanceFilter::new();
        for _ in 0..3 {
            filter.update(Some(80.0));
        }
        assert_eq!(filter.update(Some(3.0)), Some(80.0));
        assert_eq!(filter.update(Some(80.0)), Some(80.0));
    }

    #[test]
    fn missing_echo_passes_through() {
        let mut filter = DistanceFilter::new();
        filter.update(Some(5.0));
        assert_eq!(filter.update(None), None);
    }

    #[test]
    fn far_reading_after_no_echo_gap_is_not_outvoted() {
        let mut filter = DistanceFilter::new();
        for _ in 0..3 {
            assert_eq!(filter.update(Some(5.0)), Some(5.0));
        }
        for _ in 0..20 {
            assert_eq!(filter.update(None), None);
        }

        let distance = filter.update(Some(200.0));

        assert_eq!(distance, Some(200.0));
    }

    #[test]
    fn single_no_echo_clears_old_readings() {
        let mut filter = DistanceFilter::new();
        filter.update(Some(5.0));
        filter.update(Some(5.0));
        filter.update(None);
        assert_eq!(filter.update(Some(150.0)), Some(150.0));
        let distance = filter.update(Some(160.0));
        assert!(distance.is_some_and(|d| d >= 150.0));
    }
}

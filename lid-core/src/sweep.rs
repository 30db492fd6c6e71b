//! Lid Sweep
//!
//! A sweep is the stepwise servo motion from one end position to the other.
//! It is modelled as an iterator of angles; the controller consumes it one
//! step at a time and waits the configured step delay after each command.

use crate::Angle;

/// Angles visited while moving from one position to another
///
/// Strictly monotonic, never overshoots, and always ends exactly on the
/// target even when the travel is not a multiple of the step.
#[derive(Debug, Clone)]
pub struct Sweep {
    next: Option<Angle>,
    target: Angle,
    step: Angle,
}

impl Sweep {
    /// Creates a sweep from `from` to `to`, both inclusive.
    ///
    /// A zero step is treated as a step of one degree.
    pub fn new(from: Angle, to: Angle, step: Angle) -> Self {
        Self {
            next: Some(from),
            target: to,
            step: step.max(1),
        }
    }
}

impl Iterator for Sweep {
    type Item = Angle;

    fn next(&mut self) -> Option<Angle> {
        let current = self.next?;
        self.next = if current == self.target {
            None
        } else if current < self.target {
            Some(current.saturating_add(self.step).min(self.target))
        } else {
            Some(current.saturating_sub(self.step).max(self.target))
        };
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = match self.next {
            None => 0,
            Some(current) => {
                let travel = current.abs_diff(self.target) as usize;
                travel.div_ceil(self.step as usize) + 1
            }
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Sweep {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_sweep_ends_on_open_angle() {
        let angles: Vec<Angle> = Sweep::new(60, 125, 2).collect();
        assert_eq!(angles.first(), Some(&60));
        assert_eq!(angles[1], 62);
        assert_eq!(angles[angles.len() - 2], 124);
        assert_eq!(angles.last(), Some(&125));
        assert_eq!(angles.len(), 34);
    }

    #[test]
    fn closing_sweep_ends_on_closed_angle() {
        let angles: Vec<Angle> = Sweep::new(125, 60, 2).collect();
        assert_eq!(angles.first(), Some(&125));
        assert_eq!(angles[1], 123);
        assert_eq!(angles[angles.len() - 2], 61);
        assert_eq!(angles.last(), Some(&60));
        assert!(angles.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn even_travel_has_no_extra_step() {
        let angles: Vec<Angle> = Sweep::new(0, 10, 5).collect();
        assert_eq!(angles, [0, 5, 10]);
    }

    #[test]
    fn same_start_and_target_yields_once() {
        let angles: Vec<Angle> = Sweep::new(90, 90, 2).collect();
        assert_eq!(angles, [90]);
    }

    #[test]
    fn does_not_overflow_near_the_top() {
        let angles: Vec<Angle> = Sweep::new(250, 255, 4).collect();
        assert_eq!(angles, [250, 254, 255]);
    }

    #[test]
    fn zero_step_still_progresses() {
        let angles: Vec<Angle> = Sweep::new(3, 0, 0).collect();
        assert_eq!(angles, [3, 2, 1, 0]);
    }

    #[test]
    fn size_hint_matches_item_count() {
        let sweep = Sweep::new(60, 125, 2);
        let hinted = sweep.len();
        assert_eq!(hinted, sweep.count());

        let sweep = Sweep::new(125, 60, 7);
        let hinted = sweep.len();
        assert_eq!(hinted, sweep.count());
    }
}

//! Lid State
//!
//! The lid is always in exactly one of four states. Only the controller's
//! decision step moves it from one state to the next:
//!
//! ```text
//! Closed --present--> Opening --sweep done--> Open
//!   ^                                          |
//!   +--sweep done-- Closing <--absent, timeout-+
//! ```

/// Position of the lid as seen by the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LidState {
    /// Lid fully closed, waiting for an object
    #[default]
    Closed,
    /// Open sweep in progress
    Opening,
    /// Lid fully open, auto-close timer running
    Open,
    /// Close sweep in progress
    Closing,
}

impl LidState {
    /// True while a sweep is moving the lid
    pub fn is_moving(self) -> bool {
        matches!(self, LidState::Opening | LidState::Closing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        assert_eq!(LidState::default(), LidState::Closed);
    }

    #[test]
    fn only_sweeps_are_moving() {
        assert!(LidState::Opening.is_moving());
        assert!(LidState::Closing.is_moving());
        assert!(!LidState::Open.is_moving());
        assert!(!LidState::Closed.is_moving());
    }
}

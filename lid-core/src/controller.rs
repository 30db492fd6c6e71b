//! Lid Controller
//!
//! Owns the lid state and decides once per proximity tick whether the lid has
//! to open, stay open, close or stay closed.
//!
//! # Decision per tick
//! - Object present and lid closed: chirp, sweep open
//! - Object present otherwise: nothing to move, the hold timer restarts
//! - No object, lid open and the timer ran out: warn, sweep closed
//! - No object otherwise: nothing to do
//!
//! # Timing
//! The hold timer restarts on every tick that sees an object, so a hand that
//! stays in front of the sensor or comes back before the timeout keeps the lid
//! open. The timestamp is taken after a sweep finished, the hold time therefore
//! counts from a fully open lid.
//!
//! Sweeps and alerts are awaited inside the tick. A detection during a sweep
//! is only seen on the next tick.

use embassy_time::{Duration, Instant};
use embedded_hal_async::delay::DelayNs;

use crate::alert::AlertPattern;
use crate::config::{ConfigError, LidConfig};
use crate::hal::{Actuator, AlertSignal, Clock, RangeSensor};
use crate::state::LidState;
use crate::sweep::Sweep;
use crate::Angle;

/// What a tick did with the lid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LidAction {
    /// Lid was closed and has been opened
    Opened { failed_steps: u16 },
    /// Object present, lid was not closed
    AlreadyOpen,
    /// Hold time ran out and the lid has been closed
    Closed { failed_steps: u16 },
    /// Lid stays open for the remaining time
    ClosingIn(Duration),
    /// No object and nothing to close
    AlreadyClosed,
}

/// Outcome of one proximity tick, for diagnostics only
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickReport {
    /// Measured distance in cm, `None` without echo
    pub distance: Option<f64>,
    /// Whether the sample counted as an object in range
    pub present: bool,
    pub action: LidAction,
}

/// The lid state machine together with its hardware
pub struct LidController<S, A, B, C, D> {
    sensor: S,
    actuator: A,
    alert: B,
    clock: C,
    delay: D,
    config: LidConfig,
    state: LidState,
    last_proximity: Instant,
    position: Angle,
}

impl<S, A, B, C, D> LidController<S, A, B, C, D>
where
    S: RangeSensor,
    A: Actuator,
    B: AlertSignal,
    C: Clock,
    D: DelayNs,
{
    /// Creates a controller with a closed lid.
    ///
    /// Fails if the configuration does not validate.
    pub fn new(
        config: LidConfig,
        sensor: S,
        actuator: A,
        alert: B,
        clock: C,
        delay: D,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            sensor,
            actuator,
            alert,
            clock,
            delay,
            config,
            state: LidState::Closed,
            last_proximity: Instant::from_ticks(0),
            position: config.closed_angle,
        })
    }

    pub fn state(&self) -> LidState {
        self.state
    }

    /// Last angle commanded to the actuator
    pub fn position(&self) -> Angle {
        self.position
    }

    /// Time of the most recent tick that saw an object
    pub fn last_proximity(&self) -> Instant {
        self.last_proximity
    }

    pub fn config(&self) -> &LidConfig {
        &self.config
    }

    /// Moves the actuator to the closed angle once at start-up.
    ///
    /// Returns `false` if the actuator rejected the command.
    pub async fn home(&mut self) -> bool {
        self.delay.delay_us(micros(self.config.step_delay)).await;
        self.position = self.config.closed_angle;
        self.actuator.move_to(self.config.closed_angle).is_ok()
    }

    /// Samples the sensor once and acts on the result.
    pub async fn tick(&mut self) -> TickReport {
        let distance = self.sensor.measure().await;
        let present = distance.is_some_and(|d| d <= self.config.distance_threshold);

        let action = if present {
            self.on_present().await
        } else {
            self.on_absent().await
        };

        TickReport {
            distance,
            present,
            action,
        }
    }

    /// Runs the control loop forever.
    ///
    /// `on_tick` sees every report, typically to log it. Never returns.
    pub async fn run(&mut self, mut on_tick: impl FnMut(&TickReport)) {
        loop {
            let report = self.tick().await;
            on_tick(&report);
            self.delay.delay_us(micros(self.config.poll_interval)).await;
        }
    }

    async fn on_present(&mut self) -> LidAction {
        let action = match self.state {
            LidState::Closed => {
                self.alert.play(AlertPattern::OpenChirp).await;
                let failed_steps = self
                    .sweep(self.config.closed_angle, self.config.open_angle, LidState::Opening)
                    .await;
                self.state = LidState::Open;
                LidAction::Opened { failed_steps }
            }
            LidState::Opening | LidState::Open | LidState::Closing => LidAction::AlreadyOpen,
        };
        self.last_proximity = self.clock.now();
        action
    }

    async fn on_absent(&mut self) -> LidAction {
        match self.state {
            LidState::Open => {
                let elapsed = self
                    .clock
                    .now()
                    .checked_duration_since(self.last_proximity)
                    .unwrap_or(Duration::from_ticks(0));

                if elapsed > self.config.lid_timeout {
                    self.alert.play(AlertPattern::CloseWarning).await;
                    let failed_steps = self
                        .sweep(self.config.open_angle, self.config.closed_angle, LidState::Closing)
                        .await;
                    self.state = LidState::Closed;
                    LidAction::Closed { failed_steps }
                } else {
                    LidAction::ClosingIn(self.config.lid_timeout - elapsed)
                }
            }
            LidState::Closed | LidState::Opening | LidState::Closing => LidAction::AlreadyClosed,
        }
    }

    /// Steps the actuator from `from` to `to`, holding `moving` meanwhile.
    ///
    /// Returns the number of rejected step commands.
    async fn sweep(&mut self, from: Angle, to: Angle, moving: LidState) -> u16 {
        let step_delay = micros(self.config.step_delay);
        let mut failed_steps: u16 = 0;

        self.state = moving;
        for angle in Sweep::new(from, to, self.config.step) {
            if self.actuator.move_to(angle).is_err() {
                failed_steps = failed_steps.saturating_add(1);
            }
            self.position = angle;
            self.delay.delay_us(step_delay).await;
        }
        failed_steps
    }
}

fn micros(duration: Duration) -> u32 {
    duration.as_micros().min(u32::MAX as u64) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::{Cell, RefCell};
    use core::convert::Infallible;
    use embassy_futures::block_on;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct Time(Rc<Cell<u64>>);

    impl Clock for Time {
        fn now(&self) -> Instant {
            Instant::from_micros(self.0.get())
        }
    }

    impl DelayNs for Time {
        async fn delay_ns(&mut self, ns: u32) {
            self.0.set(self.0.get() + ns as u64 / 1000);
        }

        async fn delay_us(&mut self, us: u32) {
            self.0.set(self.0.get() + us as u64);
        }
    }

    struct FixedSensor(Option<f64>);

    impl RangeSensor for FixedSensor {
        async fn measure(&mut self) -> Option<f64> {
            self.0
        }
    }

    #[derive(Clone, Default)]
    struct Servo(Rc<RefCell<Vec<Angle>>>);

    impl Actuator for Servo {
        type Error = Infallible;

        fn move_to(&mut self, angle: Angle) -> Result<(), Infallible> {
            self.0.borrow_mut().push(angle);
            Ok(())
        }
    }

    struct Silent;

    impl AlertSignal for Silent {
        async fn play(&mut self, _pattern: AlertPattern) {}
    }

    fn controller(
        distance: Option<f64>,
    ) -> (LidController<FixedSensor, Servo, Silent, Time, Time>, Servo) {
        let time = Time::default();
        let servo = Servo::default();
        let controller = LidController::new(
            LidConfig::default(),
            FixedSensor(distance),
            servo.clone(),
            Silent,
            time.clone(),
            time,
        )
        .unwrap();
        (controller, servo)
    }

    #[test]
    fn rejects_invalid_config() {
        let time = Time::default();
        let result = LidController::new(
            LidConfig::default().set_step(0),
            FixedSensor(None),
            Servo::default(),
            Silent,
            time.clone(),
            time,
        );
        assert!(matches!(result, Err(ConfigError::ZeroStep)));
    }

    #[test]
    fn starts_closed_at_closed_angle() {
        let (controller, servo) = controller(None);
        assert_eq!(controller.state(), LidState::Closed);
        assert_eq!(controller.position(), 60);
        assert_eq!(controller.last_proximity(), Instant::from_ticks(0));
        assert!(servo.0.borrow().is_empty());
    }

    #[test]
    fn home_commands_closed_angle() {
        let (mut controller, servo) = controller(None);
        assert!(block_on(controller.home()));
        assert_eq!(*servo.0.borrow(), [60]);
    }

    #[test]
    fn threshold_is_inclusive() {
        let (mut controller, _) = controller(Some(10.0));
        let report = block_on(controller.tick());
        assert!(report.present);
        assert_eq!(report.action, LidAction::Opened { failed_steps: 0 });
        assert_eq!(controller.state(), LidState::Open);
    }

    #[test]
    fn no_echo_counts_as_absent() {
        let (mut controller, servo) = controller(None);
        let report = block_on(controller.tick());
        assert_eq!(report.distance, None);
        assert!(!report.present);
        assert_eq!(report.action, LidAction::AlreadyClosed);
        assert!(servo.0.borrow().is_empty());
    }

    #[test]
    fn micros_saturates() {
        assert_eq!(micros(Duration::from_millis(15)), 15_000);
        assert_eq!(micros(Duration::from_secs(10_000)), u32::MAX);
    }
}

//! Touchless lid control
//!
//! Hardware independent part of the trash can firmware: the lid state machine,
//! its auto-close timing, the stepwise lid sweep and the buzzer patterns.
//!
//! The controller talks to the outside world only through the traits in
//! [`hal`], so the same logic runs on the RP2350 and in host tests.

#![cfg_attr(not(test), no_std)]

pub mod alert;
pub mod config;
pub mod controller;
pub mod filter;
pub mod hal;
pub mod state;
pub mod sweep;

pub use alert::{AlertPattern, Burst};
pub use config::{ConfigError, LidConfig};
pub use controller::{LidAction, LidController, TickReport};
pub use filter::DistanceFilter;
pub use hal::{Actuator, AlertSignal, Clock, RangeSensor};
pub use state::LidState;
pub use sweep::Sweep;

/// Servo angle in whole degrees
pub type Angle = u8;

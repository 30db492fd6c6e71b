//! Board devices behind the lid controller's hardware traits
pub mod buzzer;
pub mod clock;
pub mod servo;
pub mod ultrasonic;

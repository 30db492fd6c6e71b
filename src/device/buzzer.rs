//! Piezo buzzer
//!
//! Plays the lid alert patterns on an active buzzer by switching its supply
//! pin. Timing comes from the embassy timer, the pattern itself from
//! [`AlertPattern::bursts`].

use embassy_rp::gpio::Output;
use embassy_time::Timer;
use lid_core::{AlertPattern, AlertSignal};

pub struct Buzzer {
    pin: Output<'static>,
}

impl Buzzer {
    pub fn new(mut pin: Output<'static>) -> Self {
        pin.set_low();
        Self { pin }
    }
}

impl AlertSignal for Buzzer {
    async fn play(&mut self, pattern: AlertPattern) {
        for burst in pattern.bursts() {
            for _ in 0..burst.cycles {
                self.pin.set_high();
                Timer::after(burst.high).await;
                self.pin.set_low();
                Timer::after(burst.low).await;
            }
            if burst.pause.as_ticks() > 0 {
                Timer::after(burst.pause).await;
            }
        }
    }
}

//! Lid Control Task
//!
//! Owns the lid controller and all of its hardware. Proximity ticks, lid
//! sweeps and alerts all run here, one after the other, so the lid state
//! never has more than one writer.

use crate::device::buzzer::Buzzer;
use crate::device::clock::SystemClock;
use crate::device::servo::ServoBuilder;
use crate::device::ultrasonic::UltrasonicSensor;
use crate::system::resources::{
    BuzzerResources, DistanceSensorResources, Irqs, LidServoResources,
};
use core::time::Duration;
use defmt::{info, warn};
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::pio::Pio;
use embassy_rp::pio_programs::pwm::{PioPwm, PioPwmProgram};
use embassy_time::Delay;
use lid_core::{LidAction, LidConfig, LidController, TickReport};

/// Runs the lid state machine forever
#[embassy_executor::task]
pub async fn lid_control(
    config: LidConfig,
    s: DistanceSensorResources,
    l: LidServoResources,
    b: BuzzerResources,
) {
    let trigger = Output::new(s.trigger_pin, Level::Low);
    let echo = Input::new(s.echo_pin, Pull::None);
    let sensor = UltrasonicSensor::new(trigger, echo);

    let Pio {
        mut common, sm0, ..
    } = Pio::new(l.pio, Irqs);
    let prg = PioPwmProgram::new(&mut common);
    let pwm_pio = PioPwm::new(&mut common, sm0, l.pin, &prg);
    let servo = ServoBuilder::new(pwm_pio)
        .set_max_degree_rotation(180)
        .set_min_pulse_width(Duration::from_micros(500))
        .set_max_pulse_width(Duration::from_micros(2400))
        .build();

    let buzzer = Buzzer::new(Output::new(b.pin, Level::Low));

    let mut lid = match LidController::new(config, sensor, servo, buzzer, SystemClock, Delay) {
        Ok(lid) => lid,
        Err(e) => defmt::panic!("Invalid lid configuration: {}", e),
    };

    if !lid.home().await {
        warn!("Servo rejected the closed position");
    }
    info!("Lid control started, lid closed");

    lid.run(log_tick).await;
}

/// Reports what a proximity tick did
fn log_tick(report: &TickReport) {
    if !report.present {
        info!("No object nearby");
    }
    match report.action {
        LidAction::Opened { failed_steps } => {
            info!("Opening lid");
            if failed_steps > 0 {
                warn!("{} servo steps failed while opening", failed_steps);
            }
        }
        LidAction::AlreadyOpen => info!("Lid already open"),
        LidAction::Closed { failed_steps } => {
            info!("Closing lid");
            if failed_steps > 0 {
                warn!("{} servo steps failed while closing", failed_steps);
            }
        }
        LidAction::ClosingIn(remaining) => info!("Closing in: {} ms", remaining.as_millis()),
        LidAction::AlreadyClosed => info!("Lid already closed"),
    }
}

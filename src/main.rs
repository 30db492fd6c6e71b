//! Touchless trash can firmware entry point
//!
//! Initializes the board and spawns the lid control task.

#![no_std]
#![no_main]

use crate::task::lid_control::lid_control;
use defmt::info;
use embassy_executor::Spawner;
use embassy_rp::block::ImageDef;
use embassy_rp::config::Config;
use system::resources::{
    AssignedResources, BuzzerResources, DistanceSensorResources, LidServoResources,
};
use {defmt_rtt as _, panic_probe as _};

/// Firmware image type for bootloader
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = ImageDef::secure_exe();

/// Hardware implementations of the lid controller traits
mod device;
/// Board configuration and resources
mod system;
/// Task implementations
mod task;

/// Firmware entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_rp::init(Config::default());

    // Split the resources into separate groups for each task
    let r = split_resources!(p);

    let config = system::config::lid_config();
    info!("Lid configuration: {}", config);

    spawner
        .spawn(lid_control(
            config,
            r.distance_sensor,
            r.lid_servo,
            r.buzzer,
        ))
        .unwrap();
}

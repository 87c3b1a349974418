//! Aither - Handheld Environmental Telemetry Node
//!
//! Main firmware binary for RP2040-based handhelds carrying the HTS221 /
//! LPS22HB / CCS811 / LIS2DH12 sensor suite and an SSD1306 OLED.
//!
//! Named after the Greek "aither" (αἰθήρ), the bright upper air - the
//! medium this device spends its life measuring.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{Adc, Channel as AdcChannel, Config as AdcConfig};
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::i2c::{Config as I2cConfig, I2c};
use embassy_time::Timer;
use {defmt_rtt as _, panic_probe as _};

mod channels;
mod display;
mod sensors;
mod tasks;

use crate::tasks::AcquisitionConfig;

/// Debug LED blink period (ms)
const HEARTBEAT_MS: u64 = 1000;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Aither firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Sensor bus (shared by the whole suite within the acquisition task)
    let sensor_i2c = I2c::new_blocking(p.I2C0, p.PIN_5, p.PIN_4, I2cConfig::default());

    // Display bus
    let display_i2c = I2c::new_blocking(p.I2C1, p.PIN_3, p.PIN_2, I2cConfig::default());

    // Battery divider on ADC0
    let adc = Adc::new_blocking(p.ADC, AdcConfig::default());
    let vbat_channel = AdcChannel::new_pin(p.PIN_26, Pull::None);

    // Mode button, active high
    let button = Input::new(p.PIN_15, Pull::Down);

    // Debug LEDs
    let mut led_a = Output::new(p.PIN_16, Level::High);
    let mut led_b = Output::new(p.PIN_17, Level::High);

    unwrap!(spawner.spawn(tasks::acquisition_task(
        sensor_i2c,
        adc,
        vbat_channel,
        AcquisitionConfig::default(),
    )));
    unwrap!(spawner.spawn(tasks::display_task(display_i2c)));
    unwrap!(spawner.spawn(tasks::button_task(button)));

    info!("Tasks spawned");

    // Main loop just blinks the debug LEDs as a liveness heartbeat
    loop {
        led_a.toggle();
        led_b.toggle();
        Timer::after_millis(HEARTBEAT_MS).await;
    }
}

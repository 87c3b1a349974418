//! Display task
//!
//! Owns the OLED for the lifetime of the process. Runs the one-time
//! splash sequence, then blocks on the frame queue and draws the view
//! selected by the mode cell for each delivered frame. Draw failures
//! are logged and never abort the loop; a panel that fails to
//! initialize is fatal and leaves the display blank.

use defmt::*;
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::I2C1;
use embassy_time::{Instant, Timer};

use aither_core::render::Renderer;

use crate::channels::{DISPLAY_MODE, FRAME_QUEUE};
use crate::display::Oled;

/// Hold after the boot-status splash stage (ms)
const SPLASH_HOLD_MS: u64 = 1000;
/// Gap between the splash sequence and the first frame (ms)
const SPLASH_DELAY_MS: u64 = 500;
/// Inter-update delay between rendered frames (ms)
const UPDATE_DELAY_MS: u64 = 1000;

/// Display task - splash sequence, then render loop
#[embassy_executor::task]
pub async fn display_task(i2c: I2c<'static, I2C1, i2c::Blocking>) {
    info!("Display task started");

    let oled = match Oled::new(i2c) {
        Ok(oled) => oled,
        Err(e) => {
            error!("display init failed: {:?}", e);
            return;
        }
    };
    let mut renderer = Renderer::new(oled);
    let started = Instant::now();

    // Splash sequence: draw failures are logged but the sequence still
    // advances through its delays.
    if let Err(e) = renderer.draw_boot_banner() {
        warn!("splash draw failed: {:?}", e);
    }
    Timer::after_millis(SPLASH_HOLD_MS).await;

    if let Err(e) = renderer.draw_welcome() {
        warn!("splash draw failed: {:?}", e);
    }
    Timer::after_millis(SPLASH_HOLD_MS).await;
    Timer::after_millis(SPLASH_DELAY_MS).await;

    loop {
        // Parks here indefinitely while the producer is silent
        let frame = FRAME_QUEUE.pop().await;

        // Mode is read once per cycle; a concurrent button edge simply
        // lands on the next frame
        let mode = DISPLAY_MODE.get();
        let uptime_ms = started.elapsed().as_millis();

        debug!("render: {:?}", mode);
        if let Err(e) = renderer.draw_frame(&frame, mode, uptime_ms) {
            warn!("draw failed: {:?}", e);
        }

        Timer::after_millis(UPDATE_DELAY_MS).await;
    }
}

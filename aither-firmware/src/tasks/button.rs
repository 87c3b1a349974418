//! Mode button task
//!
//! One rising edge advances the display mode by one step. The cell
//! update is a single atomic store, safe against the render task's
//! concurrent read; the debounce hold swallows contact chatter.

use defmt::*;
use embassy_rp::gpio::Input;
use embassy_time::Timer;

use crate::channels::DISPLAY_MODE;

/// Contact chatter settling time (ms)
const DEBOUNCE_MS: u64 = 150;

/// Button task - cycles the display mode on each rising edge
#[embassy_executor::task]
pub async fn button_task(mut button: Input<'static>) {
    info!("Button task started");

    loop {
        button.wait_for_rising_edge().await;
        let mode = DISPLAY_MODE.advance();
        debug!("mode button: now {:?}", mode);
        Timer::after_millis(DEBOUNCE_MS).await;
    }
}

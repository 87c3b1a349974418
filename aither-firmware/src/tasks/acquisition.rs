//! Sensor acquisition task
//!
//! Brings up the sensor suite over the shared I2C bus, then produces
//! one telemetry frame per sampling period and offers it to the frame
//! queue. Missing devices at startup are fatal; per-cycle read
//! failures are logged per channel and the loop continues.

use core::cell::RefCell;

use defmt::*;
use embassy_rp::adc::{Adc, Blocking, Channel};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::I2C0;
use embassy_time::{Duration, Ticker};
use embedded_hal_bus::i2c::RefCellDevice;

use aither_core::battery::{DischargeCurve, DEFAULT_CURVE};
use aither_core::queue::Offer;
use aither_core::sample::{CycleReport, Sampler};
use aither_core::traits::ReadError;

use crate::channels::FRAME_QUEUE;
use crate::sensors::{Ccs811, Hts221, Lis2dh12, Lps22hb, VbatMonitor};

/// Acquisition configuration
#[derive(Clone)]
pub struct AcquisitionConfig {
    /// Sampling period in milliseconds
    pub period_ms: u64,
    /// Battery discharge curve for the log-only capacity estimate
    pub curve: DischargeCurve<'static>,
    /// Battery divider ratio x100
    pub divider_x100: u32,
}

impl Default for AcquisitionConfig {
    fn default() -> Self {
        Self {
            period_ms: 2000,
            curve: DEFAULT_CURVE,
            divider_x100: 200,
        }
    }
}

/// Acquisition task - one telemetry frame per period
#[embassy_executor::task]
pub async fn acquisition_task(
    i2c: I2c<'static, I2C0, i2c::Blocking>,
    adc: Adc<'static, Blocking>,
    vbat_channel: Channel<'static>,
    config: AcquisitionConfig,
) {
    info!("Acquisition task started");

    let bus = RefCell::new(i2c);

    // Missing devices are fatal: no sampling starts, the error is
    // surfaced in the log and the display simply never sees a frame.
    let climate = match Hts221::new(RefCellDevice::new(&bus)) {
        Ok(dev) => dev,
        Err(e) => {
            error!("could not bring up HTS221: {:?}", e);
            return;
        }
    };
    let barometer = match Lps22hb::new(RefCellDevice::new(&bus)) {
        Ok(dev) => dev,
        Err(e) => {
            error!("could not bring up LPS22HB: {:?}", e);
            return;
        }
    };
    let air_quality = match Ccs811::new(RefCellDevice::new(&bus)) {
        Ok(dev) => dev,
        Err(e) => {
            error!("could not bring up CCS811: {:?}", e);
            return;
        }
    };
    let motion = match Lis2dh12::new(RefCellDevice::new(&bus)) {
        Ok(dev) => dev,
        Err(e) => {
            error!("could not bring up LIS2DH12: {:?}", e);
            return;
        }
    };
    let battery = VbatMonitor::new(adc, vbat_channel, config.divider_x100);

    let mut sampler = Sampler::new(climate, barometer, air_quality, motion, battery);
    let mut ticker = Ticker::every(Duration::from_millis(config.period_ms));

    info!("Sensor suite up, sampling every {} ms", config.period_ms);

    loop {
        let (frame, report) = sampler.acquire();
        log_report(&report);

        trace!(
            "frame: {}C/{}C {}% {} kPa eCO2 {} eTVOC {} tilt {} batt {} mV",
            frame.temperature_primary,
            frame.temperature_secondary,
            frame.relative_humidity,
            frame.pressure_kpa,
            frame.eco2_ppm,
            frame.etvoc_ppb,
            frame.tilt_deg,
            frame.battery_mv,
        );

        // Capacity estimate is log-only; the frame carries millivolts
        let pptt = config.curve.pptt_from_millivolts(frame.battery_mv);
        debug!("battery: {} mV (~{} pptt)", frame.battery_mv, pptt);

        if FRAME_QUEUE.offer(frame) == Offer::Purged {
            warn!("frame queue overflow: backlog purged, frame dropped");
        }

        ticker.next().await;
    }
}

/// Log each failed channel; a failure only costs that channel's fields
fn log_report(report: &CycleReport) {
    log_channel("hts221", report.climate);
    log_channel("lps22hb", report.barometer);
    log_channel("ccs811", report.air_quality);
    log_channel("lis2dh12", report.motion);
    log_channel("vbat", report.battery);
}

fn log_channel(name: &str, result: Result<(), ReadError>) {
    match result {
        Ok(()) => {}
        // Warm-up is expected after power-on, keep it quiet
        Err(ReadError::NotReady) => debug!("{}: no sample ready", name),
        Err(e) => warn!("{}: read failed: {:?}", name, e),
    }
}

//! Battery voltage monitor
//!
//! Samples the battery divider on an ADC pin and scales counts to
//! millivolts. The remaining-capacity estimate derived from this value
//! is log-only; the frame carries raw millivolts.

use embassy_rp::adc::{Adc, Blocking, Channel};

use aither_core::traits::{BatteryMonitor, ReadError};

/// ADC reference in millivolts
const VREF_MV: u32 = 3300;
/// 12-bit conversion range
const ADC_MAX: u32 = 4096;

pub struct VbatMonitor {
    adc: Adc<'static, Blocking>,
    channel: Channel<'static>,
    /// Upstream divider ratio (battery volts per ADC volt), x100
    divider_x100: u32,
}

impl VbatMonitor {
    /// Wrap an ADC channel wired to the battery divider
    ///
    /// `divider_x100` is the divider ratio times 100; the reference
    /// board halves the battery rail, so 200.
    pub fn new(adc: Adc<'static, Blocking>, channel: Channel<'static>, divider_x100: u32) -> Self {
        Self {
            adc,
            channel,
            divider_x100,
        }
    }
}

impl BatteryMonitor for VbatMonitor {
    fn read_millivolts(&mut self) -> Result<u16, ReadError> {
        let counts = self
            .adc
            .blocking_read(&mut self.channel)
            .map_err(|_| ReadError::Bus)?;

        let mv = u32::from(counts) * VREF_MV * self.divider_x100 / (ADC_MAX * 100);
        Ok(mv as u16)
    }
}

//! Telemetry frame
//!
//! One composite snapshot of all sensor readings for a single
//! acquisition cycle. Frames are built fresh every cycle, populated
//! field by field as channel reads succeed, and move by value into the
//! frame queue; nothing mutates a frame after it has been enqueued.

use core::f32::consts::PI;

/// Snapshot of one acquisition cycle
///
/// A failed channel read leaves the corresponding field at the zeroed
/// initial value, so a stalled sensor shows up downstream as a zeroed
/// reading rather than a missing frame.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TelemetryFrame {
    /// Temperature from the climate sensor (°C)
    pub temperature_primary: f32,
    /// Temperature from the barometer die (°C)
    pub temperature_secondary: f32,
    /// Relative humidity (%)
    pub relative_humidity: f32,
    /// Barometric pressure (kPa)
    pub pressure_kpa: f32,
    /// Equivalent CO2 (ppm); zero means not yet sampled
    pub eco2_ppm: u16,
    /// Equivalent total VOC (ppb); zero means not yet sampled
    pub etvoc_ppb: u16,
    /// Tilt angle derived from in-plane acceleration (degrees)
    pub tilt_deg: f32,
    /// Battery voltage (mV)
    pub battery_mv: u16,
}

impl TelemetryFrame {
    /// Create a zeroed frame for the start of an acquisition cycle
    pub const fn new() -> Self {
        Self {
            temperature_primary: 0.0,
            temperature_secondary: 0.0,
            relative_humidity: 0.0,
            pressure_kpa: 0.0,
            eco2_ppm: 0,
            etvoc_ppb: 0,
            tilt_deg: 0.0,
            battery_mv: 0,
        }
    }

    /// Mean of the two independent temperature channels, as shown on the
    /// temperature view
    pub fn mean_temperature(&self) -> f32 {
        (self.temperature_primary + self.temperature_secondary) / 2.0
    }

    /// Staleness guard for the air quality view
    ///
    /// The CCS811-class sensor reports zeros for both channels until its
    /// warm-up completes; both-zero therefore means "not yet sampled"
    /// and the air quality view is suppressed.
    pub fn is_air_quality_fresh(&self) -> bool {
        self.eco2_ppm > 0 && self.etvoc_ppb > 0
    }
}

impl Default for TelemetryFrame {
    fn default() -> Self {
        Self::new()
    }
}

/// Tilt angle in degrees from two-axis acceleration: `atan(x/y) * 180/π`
///
/// With `y == 0` the IEEE division produces ±inf and the result
/// saturates at ±90°; `x == y == 0` yields NaN. Neither case panics.
pub fn tilt_from_accel(x_g: f32, y_g: f32) -> f32 {
    libm::atanf(x_g / y_g) * (180.0 / PI)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_frame_is_zeroed() {
        let frame = TelemetryFrame::new();
        assert_eq!(frame.temperature_primary, 0.0);
        assert_eq!(frame.eco2_ppm, 0);
        assert_eq!(frame.etvoc_ppb, 0);
        assert_eq!(frame.battery_mv, 0);
    }

    #[test]
    fn test_mean_temperature() {
        let mut frame = TelemetryFrame::new();
        frame.temperature_primary = 20.0;
        frame.temperature_secondary = 22.0;
        assert_eq!(frame.mean_temperature(), 21.0);
    }

    #[test]
    fn test_air_quality_guard_suppresses_both_zero() {
        let frame = TelemetryFrame::new();
        assert!(!frame.is_air_quality_fresh());
    }

    #[test]
    fn test_air_quality_guard_requires_both_nonzero() {
        let mut frame = TelemetryFrame::new();
        frame.eco2_ppm = 450;
        assert!(!frame.is_air_quality_fresh());

        frame.etvoc_ppb = 120;
        assert!(frame.is_air_quality_fresh());
    }

    #[test]
    fn test_tilt_45_degrees() {
        let tilt = tilt_from_accel(1.0, 1.0);
        assert!((tilt - 45.0).abs() < 1e-3);
    }

    #[test]
    fn test_tilt_level() {
        let tilt = tilt_from_accel(0.0, 1.0);
        assert!(tilt.abs() < 1e-6);
    }

    #[test]
    fn test_tilt_zero_denominator_saturates() {
        let tilt = tilt_from_accel(1.0, 0.0);
        assert!((tilt - 90.0).abs() < 1e-3);

        let tilt = tilt_from_accel(-1.0, 0.0);
        assert!((tilt + 90.0).abs() < 1e-3);
    }
}

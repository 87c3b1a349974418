//! Sensor reader adapter traits
//!
//! One trait per onboard transducer. The acquisition cycle makes exactly
//! one `read_*` attempt per channel per cycle; retry is never the core's
//! job, "recovery" is simply the next cycle.

/// Errors a sensor read can report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReadError {
    /// Sensor has no fresh sample yet (warm-up, conversion in progress)
    NotReady,
    /// Bus-level communication failure
    Bus,
    /// Reading outside the sensor's plausible range
    OutOfRange,
    /// Fault condition reported by the device itself
    Fault,
}

/// Combined temperature/humidity sample (HTS221-class sensor)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClimateReading {
    /// Ambient temperature in °C
    pub temperature_c: f32,
    /// Relative humidity in %
    pub humidity_pct: f32,
}

/// Pressure sample with the barometer's own temperature channel
/// (LPS22HB-class sensor)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BaroReading {
    /// Barometric pressure in kPa
    pub pressure_kpa: f32,
    /// Die temperature in °C (second independent temperature channel)
    pub temperature_c: f32,
}

/// Air quality sample (CCS811-class sensor)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AirQualityReading {
    /// Equivalent CO2 in ppm
    pub eco2_ppm: u16,
    /// Equivalent total VOC in ppb
    pub etvoc_ppb: u16,
}

/// Two-axis acceleration sample used for tilt derivation
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AccelReading {
    /// In-plane X acceleration in g
    pub x_g: f32,
    /// In-plane Y acceleration in g
    pub y_g: f32,
}

/// Temperature/humidity sensor
pub trait ClimateSensor {
    /// Take one climate sample
    fn read_climate(&mut self) -> Result<ClimateReading, ReadError>;
}

/// Barometric pressure sensor
pub trait Barometer {
    /// Take one pressure sample
    fn read_pressure(&mut self) -> Result<BaroReading, ReadError>;
}

/// Air quality (eCO2/eTVOC) sensor
///
/// A sensor still in its warm-up window reports [`ReadError::NotReady`];
/// the frame's air quality fields then stay zero, which downstream logic
/// treats as "stale" (see `TelemetryFrame::is_air_quality_fresh`).
pub trait AirQualitySensor {
    /// Take one air quality sample
    fn read_air_quality(&mut self) -> Result<AirQualityReading, ReadError>;
}

/// Accelerometer, sampled for the tilt readout
pub trait Accelerometer {
    /// Take one two-axis acceleration sample
    fn read_accel(&mut self) -> Result<AccelReading, ReadError>;
}

/// Battery voltage monitor
pub trait BatteryMonitor {
    /// Read the battery voltage in millivolts
    fn read_millivolts(&mut self) -> Result<u16, ReadError>;
}

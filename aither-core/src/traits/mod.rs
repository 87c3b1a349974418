//! Hardware abstraction traits
//!
//! These traits define the interface between the application logic
//! and hardware-specific implementations.

pub mod sensor;
pub mod surface;

pub use sensor::{
    Accelerometer, AccelReading, AirQualityReading, AirQualitySensor, BaroReading, Barometer,
    BatteryMonitor, ClimateReading, ClimateSensor, ReadError,
};
pub use surface::{DrawError, DrawSurface};

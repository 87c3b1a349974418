//! Sensor acquisition cycle
//!
//! One `acquire` call is one cycle: every channel gets exactly one
//! sample attempt, successes populate the fresh frame, failures leave
//! the field zeroed and are recorded in the cycle report. A single
//! failing channel never aborts the cycle.
//!
//! Scheduling (the fixed sampling period) and delivery (the queue
//! offer) belong to the firmware's acquisition task.

use crate::frame::{tilt_from_accel, TelemetryFrame};
use crate::traits::{
    Accelerometer, AirQualitySensor, Barometer, BatteryMonitor, ClimateSensor, ReadError,
};

/// Per-channel outcome of one acquisition cycle
///
/// Carried alongside the frame so the caller can log failures per
/// channel without the core depending on a logging backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CycleReport {
    pub climate: Result<(), ReadError>,
    pub barometer: Result<(), ReadError>,
    pub air_quality: Result<(), ReadError>,
    pub motion: Result<(), ReadError>,
    pub battery: Result<(), ReadError>,
}

impl CycleReport {
    /// True if every channel sampled successfully
    pub fn is_clean(&self) -> bool {
        self.climate.is_ok()
            && self.barometer.is_ok()
            && self.air_quality.is_ok()
            && self.motion.is_ok()
            && self.battery.is_ok()
    }
}

/// Drives one acquisition cycle across the full sensor suite
///
/// Owns the sensor adapters for the lifetime of the acquisition loop;
/// failing to construct an adapter at startup is fatal and happens
/// before a `Sampler` ever exists.
pub struct Sampler<C, B, A, M, V> {
    climate: C,
    barometer: B,
    air_quality: A,
    motion: M,
    battery: V,
}

impl<C, B, A, M, V> Sampler<C, B, A, M, V>
where
    C: ClimateSensor,
    B: Barometer,
    A: AirQualitySensor,
    M: Accelerometer,
    V: BatteryMonitor,
{
    /// Assemble a sampler from the five channel adapters
    pub fn new(climate: C, barometer: B, air_quality: A, motion: M, battery: V) -> Self {
        Self {
            climate,
            barometer,
            air_quality,
            motion,
            battery,
        }
    }

    /// Run one acquisition cycle and build the telemetry frame
    pub fn acquire(&mut self) -> (TelemetryFrame, CycleReport) {
        let mut frame = TelemetryFrame::new();

        let climate = self.climate.read_climate().map(|reading| {
            frame.temperature_primary = reading.temperature_c;
            frame.relative_humidity = reading.humidity_pct;
        });

        let barometer = self.barometer.read_pressure().map(|reading| {
            frame.pressure_kpa = reading.pressure_kpa;
            frame.temperature_secondary = reading.temperature_c;
        });

        let air_quality = self.air_quality.read_air_quality().map(|reading| {
            frame.eco2_ppm = reading.eco2_ppm;
            frame.etvoc_ppb = reading.etvoc_ppb;
        });

        let motion = self.motion.read_accel().map(|reading| {
            frame.tilt_deg = tilt_from_accel(reading.x_g, reading.y_g);
        });

        let battery = self.battery.read_millivolts().map(|mv| {
            frame.battery_mv = mv;
        });

        (
            frame,
            CycleReport {
                climate,
                barometer,
                air_quality,
                motion,
                battery,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{AccelReading, AirQualityReading, BaroReading, ClimateReading};

    struct FakeClimate(Result<ClimateReading, ReadError>);
    impl ClimateSensor for FakeClimate {
        fn read_climate(&mut self) -> Result<ClimateReading, ReadError> {
            self.0
        }
    }

    struct FakeBaro(Result<BaroReading, ReadError>);
    impl Barometer for FakeBaro {
        fn read_pressure(&mut self) -> Result<BaroReading, ReadError> {
            self.0
        }
    }

    struct FakeAirQuality(Result<AirQualityReading, ReadError>);
    impl AirQualitySensor for FakeAirQuality {
        fn read_air_quality(&mut self) -> Result<AirQualityReading, ReadError> {
            self.0
        }
    }

    struct FakeAccel(Result<AccelReading, ReadError>);
    impl Accelerometer for FakeAccel {
        fn read_accel(&mut self) -> Result<AccelReading, ReadError> {
            self.0
        }
    }

    struct FakeBattery(Result<u16, ReadError>);
    impl BatteryMonitor for FakeBattery {
        fn read_millivolts(&mut self) -> Result<u16, ReadError> {
            self.0
        }
    }

    fn healthy_sampler() -> Sampler<FakeClimate, FakeBaro, FakeAirQuality, FakeAccel, FakeBattery>
    {
        Sampler::new(
            FakeClimate(Ok(ClimateReading {
                temperature_c: 20.0,
                humidity_pct: 50.0,
            })),
            FakeBaro(Ok(BaroReading {
                pressure_kpa: 101.3,
                temperature_c: 22.0,
            })),
            FakeAirQuality(Ok(AirQualityReading {
                eco2_ppm: 450,
                etvoc_ppb: 120,
            })),
            FakeAccel(Ok(AccelReading { x_g: 1.0, y_g: 1.0 })),
            FakeBattery(Ok(3812)),
        )
    }

    #[test]
    fn test_clean_cycle_populates_every_field() {
        let mut sampler = healthy_sampler();
        let (frame, report) = sampler.acquire();

        assert!(report.is_clean());
        assert_eq!(frame.temperature_primary, 20.0);
        assert_eq!(frame.temperature_secondary, 22.0);
        assert_eq!(frame.relative_humidity, 50.0);
        assert_eq!(frame.pressure_kpa, 101.3);
        assert_eq!(frame.eco2_ppm, 450);
        assert_eq!(frame.etvoc_ppb, 120);
        assert!((frame.tilt_deg - 45.0).abs() < 1e-3);
        assert_eq!(frame.battery_mv, 3812);
    }

    #[test]
    fn test_failed_channel_leaves_field_zeroed() {
        let mut sampler = healthy_sampler();
        sampler.air_quality = FakeAirQuality(Err(ReadError::NotReady));

        let (frame, report) = sampler.acquire();

        assert_eq!(report.air_quality, Err(ReadError::NotReady));
        assert_eq!(frame.eco2_ppm, 0);
        assert_eq!(frame.etvoc_ppb, 0);
        assert!(!frame.is_air_quality_fresh());
    }

    #[test]
    fn test_one_failure_never_aborts_the_cycle() {
        let mut sampler = healthy_sampler();
        sampler.climate = FakeClimate(Err(ReadError::Bus));

        let (frame, report) = sampler.acquire();

        assert!(!report.is_clean());
        assert_eq!(report.climate, Err(ReadError::Bus));
        // Remaining channels still populated
        assert_eq!(frame.pressure_kpa, 101.3);
        assert_eq!(frame.eco2_ppm, 450);
        assert_eq!(frame.battery_mv, 3812);
        // Failed channel stays at the cycle's initial value
        assert_eq!(frame.temperature_primary, 0.0);
        assert_eq!(frame.relative_humidity, 0.0);
    }

    #[test]
    fn test_all_channels_down_still_yields_a_frame() {
        let mut sampler = Sampler::new(
            FakeClimate(Err(ReadError::Bus)),
            FakeBaro(Err(ReadError::Bus)),
            FakeAirQuality(Err(ReadError::Bus)),
            FakeAccel(Err(ReadError::Bus)),
            FakeBattery(Err(ReadError::Bus)),
        );

        let (frame, report) = sampler.acquire();
        assert!(!report.is_clean());
        assert_eq!(frame, TelemetryFrame::new());
    }
}

//! HTS221 temperature/humidity driver
//!
//! The part stores factory calibration pairs; readings are linear
//! interpolations between the two calibration points of each channel.

use embedded_hal::i2c::I2c;

use aither_core::traits::{ClimateReading, ClimateSensor, ReadError};

const ADDR: u8 = 0x5F;

const WHO_AM_I: u8 = 0x0F;
const CTRL_REG1: u8 = 0x20;
const STATUS_REG: u8 = 0x27;
const HUMIDITY_OUT_L: u8 = 0x28;
const CALIB_START: u8 = 0x30;

const DEVICE_ID: u8 = 0xBC;
/// PD | BDU | ODR = 1 Hz
const CTRL1_ACTIVE: u8 = 0x85;
/// STATUS: both humidity and temperature samples available
const STATUS_READY: u8 = 0x03;
/// Register auto-increment flag on the subaddress
const AUTO_INC: u8 = 0x80;

/// Factory calibration, read once at bring-up
struct Calibration {
    t0_degc: f32,
    t1_degc: f32,
    t0_out: i16,
    t1_out: i16,
    h0_rh: f32,
    h1_rh: f32,
    h0_out: i16,
    h1_out: i16,
}

pub struct Hts221<I2C> {
    i2c: I2C,
    calib: Calibration,
}

impl<I2C: I2c> Hts221<I2C> {
    /// Probe the device, read calibration and switch to 1 Hz sampling
    pub fn new(mut i2c: I2C) -> Result<Self, ReadError> {
        let mut id = [0u8; 1];
        i2c.write_read(ADDR, &[WHO_AM_I], &mut id)
            .map_err(|_| ReadError::Bus)?;
        if id[0] != DEVICE_ID {
            return Err(ReadError::Fault);
        }

        let mut cal = [0u8; 16];
        i2c.write_read(ADDR, &[CALIB_START | AUTO_INC], &mut cal)
            .map_err(|_| ReadError::Bus)?;

        // T0/T1 are 10-bit values split across the msb register
        let t0_x8 = u16::from(cal[2]) | (u16::from(cal[5] & 0x03) << 8);
        let t1_x8 = u16::from(cal[3]) | (u16::from(cal[5] & 0x0C) << 6);

        let calib = Calibration {
            t0_degc: t0_x8 as f32 / 8.0,
            t1_degc: t1_x8 as f32 / 8.0,
            t0_out: i16::from_le_bytes([cal[12], cal[13]]),
            t1_out: i16::from_le_bytes([cal[14], cal[15]]),
            h0_rh: cal[0] as f32 / 2.0,
            h1_rh: cal[1] as f32 / 2.0,
            h0_out: i16::from_le_bytes([cal[6], cal[7]]),
            h1_out: i16::from_le_bytes([cal[10], cal[11]]),
        };

        i2c.write(ADDR, &[CTRL_REG1, CTRL1_ACTIVE])
            .map_err(|_| ReadError::Bus)?;

        Ok(Self { i2c, calib })
    }

    fn interpolate(raw: i16, x0: i16, x1: i16, y0: f32, y1: f32) -> f32 {
        let span = (x1 - x0) as f32;
        if span == 0.0 {
            return y0;
        }
        y0 + (y1 - y0) * (raw - x0) as f32 / span
    }
}

impl<I2C: I2c> ClimateSensor for Hts221<I2C> {
    fn read_climate(&mut self) -> Result<ClimateReading, ReadError> {
        let mut status = [0u8; 1];
        self.i2c
            .write_read(ADDR, &[STATUS_REG], &mut status)
            .map_err(|_| ReadError::Bus)?;
        if status[0] & STATUS_READY != STATUS_READY {
            return Err(ReadError::NotReady);
        }

        let mut out = [0u8; 4];
        self.i2c
            .write_read(ADDR, &[HUMIDITY_OUT_L | AUTO_INC], &mut out)
            .map_err(|_| ReadError::Bus)?;

        let h_raw = i16::from_le_bytes([out[0], out[1]]);
        let t_raw = i16::from_le_bytes([out[2], out[3]]);

        let c = &self.calib;
        Ok(ClimateReading {
            temperature_c: Self::interpolate(t_raw, c.t0_out, c.t1_out, c.t0_degc, c.t1_degc),
            humidity_pct: Self::interpolate(h_raw, c.h0_out, c.h1_out, c.h0_rh, c.h1_rh),
        })
    }
}

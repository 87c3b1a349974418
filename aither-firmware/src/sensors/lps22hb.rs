//! LPS22HB barometric pressure driver
//!
//! Also supplies the frame's second temperature channel from the
//! sensor die.

use embedded_hal::i2c::I2c;

use aither_core::traits::{BaroReading, Barometer, ReadError};

const ADDR: u8 = 0x5D;

const WHO_AM_I: u8 = 0x0F;
const CTRL_REG1: u8 = 0x10;
const STATUS_REG: u8 = 0x27;
const PRESS_OUT_XL: u8 = 0x28;

const DEVICE_ID: u8 = 0xB1;
/// ODR = 1 Hz | BDU
const CTRL1_ACTIVE: u8 = 0x12;
/// STATUS: pressure and temperature samples available
const STATUS_READY: u8 = 0x03;

/// Pressure LSB per hPa
const PRESS_SCALE: f32 = 4096.0;

pub struct Lps22hb<I2C> {
    i2c: I2C,
}

impl<I2C: I2c> Lps22hb<I2C> {
    /// Probe the device and switch to 1 Hz sampling
    pub fn new(mut i2c: I2C) -> Result<Self, ReadError> {
        let mut id = [0u8; 1];
        i2c.write_read(ADDR, &[WHO_AM_I], &mut id)
            .map_err(|_| ReadError::Bus)?;
        if id[0] != DEVICE_ID {
            return Err(ReadError::Fault);
        }

        i2c.write(ADDR, &[CTRL_REG1, CTRL1_ACTIVE])
            .map_err(|_| ReadError::Bus)?;

        Ok(Self { i2c })
    }
}

impl<I2C: I2c> Barometer for Lps22hb<I2C> {
    fn read_pressure(&mut self) -> Result<BaroReading, ReadError> {
        let mut status = [0u8; 1];
        self.i2c
            .write_read(ADDR, &[STATUS_REG], &mut status)
            .map_err(|_| ReadError::Bus)?;
        if status[0] & STATUS_READY != STATUS_READY {
            return Err(ReadError::NotReady);
        }

        // 3 pressure bytes + 2 temperature bytes, auto-incremented
        let mut out = [0u8; 5];
        self.i2c
            .write_read(ADDR, &[PRESS_OUT_XL], &mut out)
            .map_err(|_| ReadError::Bus)?;

        let p_raw = i32::from_le_bytes([out[0], out[1], out[2], 0]) << 8 >> 8;
        let t_raw = i16::from_le_bytes([out[3], out[4]]);

        Ok(BaroReading {
            // hPa from the sensor, kPa in the frame
            pressure_kpa: p_raw as f32 / PRESS_SCALE / 10.0,
            temperature_c: t_raw as f32 / 100.0,
        })
    }
}

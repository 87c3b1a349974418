//! LIS2DH12 accelerometer driver
//!
//! Only the two in-plane axes are read; the acquisition cycle derives
//! the tilt angle from them.

use embedded_hal::i2c::I2c;

use aither_core::traits::{AccelReading, Accelerometer, ReadError};

const ADDR: u8 = 0x19;

const WHO_AM_I: u8 = 0x0F;
const CTRL_REG1: u8 = 0x20;
const OUT_X_L: u8 = 0x28;

const DEVICE_ID: u8 = 0x33;
/// ODR = 10 Hz, normal mode, XYZ enabled
const CTRL1_ACTIVE: u8 = 0x27;
/// Register auto-increment flag on the subaddress
const AUTO_INC: u8 = 0x80;

/// LSB per g at ±2 g full scale, left-justified 16-bit output
const SCALE: f32 = 16384.0;

pub struct Lis2dh12<I2C> {
    i2c: I2C,
}

impl<I2C: I2c> Lis2dh12<I2C> {
    /// Probe the device and enable 10 Hz sampling on all axes
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

impl<I2C: I2c> Accelerometer for Lis2dh12<I2C> {
    fn read_accel(&mut self) -> Result<AccelReading, ReadError> {
        let mut out = [0u8; 4];
        self.i2c
            .write_read(ADDR, &[OUT_X_L | AUTO_INC], &mut out)
            .map_err(|_| ReadError::Bus)?;

        let x_raw = i16::from_le_bytes([out[0], out[1]]);
        let y_raw = i16::from_le_bytes([out[2], out[3]]);

        Ok(AccelReading {
            x_g: x_raw as f32 / SCALE,
            y_g: y_raw as f32 / SCALE,
        })
    }
}

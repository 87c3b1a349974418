//! CCS811 air quality (eCO2/eTVOC) driver
//!
//! The metal-oxide sensor needs a warm-up window after power-on during
//! which it reports no data; that surfaces as [`ReadError::NotReady`]
//! and the frame's air quality fields stay zero, which in turn keeps
//! the air quality view suppressed.

use embedded_hal::i2c::I2c;

use aither_core::traits::{AirQualityReading, AirQualitySensor, ReadError};

const ADDR: u8 = 0x5A;

const REG_STATUS: u8 = 0x00;
const REG_MEAS_MODE: u8 = 0x01;
const REG_ALG_RESULT_DATA: u8 = 0x02;
const REG_HW_ID: u8 = 0x20;
const REG_APP_START: u8 = 0xF4;

const HW_ID: u8 = 0x81;
/// Constant-power mode, one measurement per second
const MEAS_MODE_1S: u8 = 0x10;

const STATUS_APP_VALID: u8 = 1 << 4;
const STATUS_FW_MODE_APP: u8 = 1 << 7;
const STATUS_DATA_READY: u8 = 1 << 3;
const STATUS_ERROR: u8 = 1 << 0;

pub struct Ccs811<I2C> {
    i2c: I2C,
}

impl<I2C: I2c> Ccs811<I2C> {
    /// Probe the device, start the application firmware and select the
    /// 1 s measurement mode
    pub fn new(mut i2c: I2C) -> Result<Self, ReadError> {
        let mut id = [0u8; 1];
        i2c.write_read(ADDR, &[REG_HW_ID], &mut id)
            .map_err(|_| ReadError::Bus)?;
        if id[0] != HW_ID {
            return Err(ReadError::Fault);
        }

        let mut status = [0u8; 1];
        i2c.write_read(ADDR, &[REG_STATUS], &mut status)
            .map_err(|_| ReadError::Bus)?;
        if status[0] & STATUS_APP_VALID == 0 {
            return Err(ReadError::Fault);
        }

        // Leave the bootloader if we are not already in application mode
        if status[0] & STATUS_FW_MODE_APP == 0 {
            i2c.write(ADDR, &[REG_APP_START]).map_err(|_| ReadError::Bus)?;
        }

        i2c.write(ADDR, &[REG_MEAS_MODE, MEAS_MODE_1S])
            .map_err(|_| ReadError::Bus)?;

        Ok(Self { i2c })
    }
}

impl<I2C: I2c> AirQualitySensor for Ccs811<I2C> {
    fn read_air_quality(&mut self) -> Result<AirQualityReading, ReadError> {
        let mut status = [0u8; 1];
        self.i2c
            .write_read(ADDR, &[REG_STATUS], &mut status)
            .map_err(|_| ReadError::Bus)?;

        if status[0] & STATUS_ERROR != 0 {
            return Err(ReadError::Fault);
        }
        if status[0] & STATUS_DATA_READY == 0 {
            return Err(ReadError::NotReady);
        }

        let mut out = [0u8; 4];
        self.i2c
            .write_read(ADDR, &[REG_ALG_RESULT_DATA], &mut out)
            .map_err(|_| ReadError::Bus)?;

        Ok(AirQualityReading {
            eco2_ppm: u16::from_be_bytes([out[0], out[1]]),
            etvoc_ppb: u16::from_be_bytes([out[2], out[3]]),
        })
    }
}

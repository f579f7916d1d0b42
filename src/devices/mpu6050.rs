//! MPU6050 6-axis IMU driver
//!
//! Reads raw accelerometer and gyroscope words over the register bus and
//! converts them to physical units. The full-scale ranges are fixed at
//! power-on defaults (±2g, ±250°/s); no runtime range switching.
//!
//! Register words are 16-bit big-endian signed, packed high byte first
//! starting at the block's base register.

use crate::bus::RegisterBus;
use crate::error::Result;
use crate::types::Vector3;

/// Default 7-bit I2C address (AD0 low)
pub const DEFAULT_ADDRESS: u8 = 0x68;

/// Power management register 1
const PWR_MGMT_1: u8 = 0x6B;
/// Accelerometer output block base (ACCEL_XOUT_H)
const ACCEL_XOUT_H: u8 = 0x3B;
/// Temperature output block base (TEMP_OUT_H)
const TEMP_OUT_H: u8 = 0x41;
/// Gyroscope output block base (GYRO_XOUT_H)
const GYRO_XOUT_H: u8 = 0x43;

/// Accelerometer sensitivity at ±2g full scale (LSB/g)
const ACCEL_LSB_PER_G: f32 = 16384.0;
/// Gyroscope sensitivity at ±250°/s full scale (LSB/(°/s))
const GYRO_LSB_PER_DPS: f32 = 131.0;

/// Convert a raw accelerometer word to g-force (±2g range)
#[inline]
pub fn to_accel_g(raw: i16) -> f32 {
    raw as f32 / ACCEL_LSB_PER_G
}

/// Convert a raw gyroscope word to degrees/second (±250°/s range)
#[inline]
pub fn to_gyro_dps(raw: i16) -> f32 {
    raw as f32 / GYRO_LSB_PER_DPS
}

/// MPU6050 driver over a register bus
pub struct Mpu6050<B: RegisterBus> {
    bus: B,
}

impl<B: RegisterBus> Mpu6050<B> {
    /// Create a driver over an opened bus
    pub fn new(bus: B) -> Self {
        Self { bus }
    }

    /// Wake the device out of sleep mode.
    ///
    /// The MPU6050 powers up asleep; clearing PWR_MGMT_1 must happen
    /// before the first sensor read.
    pub fn initialize(&mut self) -> Result<()> {
        self.bus.write_register(PWR_MGMT_1, 0x00)?;
        log::info!("MPU6050 initialized");
        Ok(())
    }

    /// Read the accelerometer, converted to g
    pub fn read_accel(&mut self) -> Result<Vector3> {
        let [x, y, z] = self.read_word_triplet(ACCEL_XOUT_H)?;
        Ok(Vector3::new(to_accel_g(x), to_accel_g(y), to_accel_g(z)))
    }

    /// Read the gyroscope, converted to °/s (uncalibrated)
    pub fn read_gyro(&mut self) -> Result<Vector3> {
        let [x, y, z] = self.read_word_triplet(GYRO_XOUT_H)?;
        Ok(Vector3::new(to_gyro_dps(x), to_gyro_dps(y), to_gyro_dps(z)))
    }

    /// Read the die temperature in °C
    pub fn read_temperature(&mut self) -> Result<f32> {
        let mut raw = [0u8; 2];
        self.bus.read_register_block(TEMP_OUT_H, &mut raw)?;
        let word = i16::from_be_bytes(raw);
        Ok(word as f32 / 340.0 + 36.53)
    }

    /// Read a 3-axis register block as big-endian signed words
    fn read_word_triplet(&mut self, start_register: u8) -> Result<[i16; 3]> {
        let mut raw = [0u8; 6];
        self.bus.read_register_block(start_register, &mut raw)?;
        Ok([
            i16::from_be_bytes([raw[0], raw[1]]),
            i16::from_be_bytes([raw[2], raw[3]]),
            i16::from_be_bytes([raw[4], raw[5]]),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bus::MockBus;

    #[test]
    fn test_accel_scale_exact() {
        assert_eq!(to_accel_g(16384), 1.0);
        assert_eq!(to_accel_g(-16384), -1.0);
        assert_eq!(to_accel_g(0), 0.0);
        assert_eq!(to_accel_g(8192), 0.5);
    }

    #[test]
    fn test_gyro_scale_exact() {
        assert_eq!(to_gyro_dps(131), 1.0);
        assert_eq!(to_gyro_dps(-131), -1.0);
        assert_eq!(to_gyro_dps(262), 2.0);
    }

    #[test]
    fn test_conversions_linear() {
        for raw in [-32768i16, -1000, -1, 0, 1, 1000, 32767] {
            assert_eq!(to_accel_g(raw), raw as f32 / 16384.0);
            assert_eq!(to_gyro_dps(raw), raw as f32 / 131.0);
        }
    }

    #[test]
    fn test_initialize_wakes_device() {
        let bus = MockBus::new();
        let mut sensor = Mpu6050::new(bus.clone());
        sensor.initialize().unwrap();
        assert_eq!(bus.writes(), vec![(PWR_MGMT_1, 0x00)]);
    }

    #[test]
    fn test_read_accel_parses_big_endian_words() {
        let bus = MockBus::new();
        bus.set_words(ACCEL_XOUT_H, [16384, -16384, 0]);
        let mut sensor = Mpu6050::new(bus);

        let accel = sensor.read_accel().unwrap();
        assert_eq!(accel, Vector3::new(1.0, -1.0, 0.0));
    }

    #[test]
    fn test_read_gyro_converts_to_dps() {
        let bus = MockBus::new();
        bus.set_words(GYRO_XOUT_H, [131, 262, -131]);
        let mut sensor = Mpu6050::new(bus);

        let gyro = sensor.read_gyro().unwrap();
        assert_eq!(gyro, Vector3::new(1.0, 2.0, -1.0));
    }

    #[test]
    fn test_read_temperature() {
        let bus = MockBus::new();
        // 340 raw counts above offset = +1°C over 36.53
        bus.set_block(TEMP_OUT_H, &340i16.to_be_bytes());
        let mut sensor = Mpu6050::new(bus);

        let temp = sensor.read_temperature().unwrap();
        assert!((temp - 37.53).abs() < 1e-3, "temp={temp}");
    }
}

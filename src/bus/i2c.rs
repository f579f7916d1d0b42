//! Linux I2C register bus

use super::RegisterBus;
use crate::error::{Error, Result};
use i2cdev::core::I2CDevice;
use i2cdev::linux::LinuxI2CDevice;

/// Register bus backed by a Linux I2C character device
pub struct I2cBus {
    device: LinuxI2CDevice,
}

impl I2cBus {
    /// Open an I2C bus for a single device address.
    ///
    /// # Arguments
    /// * `path` - I2C device path (e.g., "/dev/i2c-1")
    /// * `address` - 7-bit device address (e.g., 0x68)
    pub fn open(path: &str, address: u8) -> Result<Self> {
        let device = LinuxI2CDevice::new(path, u16::from(address))?;
        log::info!("Opened I2C bus {} (device {:#04x})", path, address);
        Ok(I2cBus { device })
    }
}

impl RegisterBus for I2cBus {
    fn read_register_block(&mut self, start_register: u8, buffer: &mut [u8]) -> Result<()> {
        let data = self
            .device
            .smbus_read_i2c_block_data(start_register, buffer.len() as u8)?;
        if data.len() != buffer.len() {
            return Err(Error::ShortRead {
                register: start_register,
                expected: buffer.len(),
                actual: data.len(),
            });
        }
        buffer.copy_from_slice(&data);
        Ok(())
    }

    fn write_register(&mut self, register: u8, value: u8) -> Result<()> {
        self.device.smbus_write_byte_data(register, value)?;
        Ok(())
    }
}

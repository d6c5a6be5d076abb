//! I²C interface implementation built on top of `embedded-hal` `I2c`.

use embedded_hal::i2c::I2c;

use super::D7sInterface;
use crate::registers::DEVICE_ADDRESS;

/// I²C-based interface implementation for the D7S driver.
pub struct I2cInterface<I2C> {
    i2c: I2C,
}

impl<I2C> I2cInterface<I2C> {
    /// Creates a new interface talking to the sensor at [`DEVICE_ADDRESS`].
    pub const fn new(i2c: I2C) -> Self {
        Self { i2c }
    }

    /// Provides mutable access to the wrapped I²C bus.
    pub fn i2c_mut(&mut self) -> &mut I2C {
        &mut self.i2c
    }

    /// Consumes the interface and returns the owned I²C bus.
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C> D7sInterface for I2cInterface<I2C>
where
    I2C: I2c,
{
    type Error = I2C::Error;

    fn write_register(&mut self, register: u16, value: u8) -> core::result::Result<(), Self::Error> {
        let [high, low] = register.to_be_bytes();
        self.i2c.write(DEVICE_ADDRESS, &[high, low, value])
    }

    fn read_register(&mut self, register: u16) -> core::result::Result<u8, Self::Error> {
        let mut value = [0u8; 1];
        self.read_many(register, &mut value)?;
        Ok(value[0])
    }

    fn read_many(&mut self, register: u16, buf: &mut [u8]) -> core::result::Result<(), Self::Error> {
        if buf.is_empty() {
            return Ok(());
        }

        // Address phase and data phase share one transaction joined by a repeated start.
        self.i2c.write_read(DEVICE_ADDRESS, &register.to_be_bytes(), buf)
    }
}

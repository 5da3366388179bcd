//! `RegisterBus` over an `embedded-hal` 1.0 I2C bus
//!
//! This module wraps any `embedded_hal::i2c::I2c` implementation (a HAL
//! peripheral, or a shared-bus device from `embedded-hal-bus`) and addresses
//! one target device on it.

use embedded_hal::i2c::{I2c, Operation, SevenBitAddress};

use crate::bus::RegisterBus;

/// I2C target configuration
///
/// There is no default address; each device driver supplies its own.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct I2cBusConfig {
    /// 7-bit target address
    pub address: SevenBitAddress,
}

/// I2C register bus for a single target address
///
/// # Example
///
/// ```ignore
/// let bus = I2cRegisterBus::new(i2c, I2cBusConfig { address: 0x51 });
/// let ctrl1 = bus.read_reg(0x00)?;
/// ```
pub struct I2cRegisterBus<I2C> {
    i2c: I2C,
    config: I2cBusConfig,
}

impl<I2C: I2c> I2cRegisterBus<I2C> {
    /// Create a register bus for the configured target
    pub fn new(i2c: I2C, config: I2cBusConfig) -> Self {
        Self { i2c, config }
    }

    /// Target address
    pub fn address(&self) -> SevenBitAddress {
        self.config.address
    }

    /// Release the I2C bus
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C: I2c> RegisterBus for I2cRegisterBus<I2C> {
    type Error = I2C::Error;

    fn read_reg(&mut self, reg: u8) -> Result<u8, Self::Error> {
        let mut value = [0u8];
        self.i2c.write_read(self.config.address, &[reg], &mut value)?;
        Ok(value[0])
    }

    fn write_reg(&mut self, reg: u8, value: u8) -> Result<(), Self::Error> {
        self.i2c.write(self.config.address, &[reg, value])
    }

    fn burst_read(&mut self, start: u8, buf: &mut [u8]) -> Result<(), Self::Error> {
        self.i2c.write_read(self.config.address, &[start], buf)
    }

    fn burst_write(&mut self, start: u8, data: &[u8]) -> Result<(), Self::Error> {
        // Adjacent writes go out back to back without a repeated start
        self.i2c.transaction(
            self.config.address,
            &mut [Operation::Write(&[start]), Operation::Write(data)],
        )
    }
}

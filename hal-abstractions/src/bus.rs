//! Register-addressed bus trait
//!
//! Peripherals that expose an 8-bit register file (most I2C sensors and RTCs)
//! are driven through five primitives: single read, single write, masked
//! read-modify-write, and burst read/write starting at a base register.

/// Register-addressed access to a single peripheral
///
/// Every method is a blocking transaction. Implementors do not retry; errors
/// are returned verbatim to the driver.
///
/// # Example Implementation
/// ```ignore
/// struct SpiRegisters { spi: Spi }
///
/// impl RegisterBus for SpiRegisters {
///     type Error = SpiError;
///     fn read_reg(&mut self, reg: u8) -> Result<u8, SpiError> { /* ... */ }
///     // ...
/// }
/// ```
pub trait RegisterBus {
    /// Transport error
    type Error;

    /// Whether the underlying bus controller is usable
    ///
    /// Buses that cannot be absent report `true`.
    fn is_ready(&mut self) -> bool {
        true
    }

    /// Read one register
    fn read_reg(&mut self, reg: u8) -> Result<u8, Self::Error>;

    /// Write one register
    fn write_reg(&mut self, reg: u8, value: u8) -> Result<(), Self::Error>;

    /// Replace the bits selected by `mask` with the same bits of `value`
    ///
    /// Writes `(old & !mask) | (value & mask)`. The write is issued even when
    /// the register already holds the new value.
    fn update_reg(&mut self, reg: u8, mask: u8, value: u8) -> Result<(), Self::Error> {
        let old = self.read_reg(reg)?;
        self.write_reg(reg, merge_masked(old, mask, value))
    }

    /// Read `buf.len()` consecutive registers starting at `start`
    fn burst_read(&mut self, start: u8, buf: &mut [u8]) -> Result<(), Self::Error>;

    /// Write `data` to consecutive registers starting at `start`
    fn burst_write(&mut self, start: u8, data: &[u8]) -> Result<(), Self::Error>;
}

impl<T: RegisterBus + ?Sized> RegisterBus for &mut T {
    type Error = T::Error;

    fn is_ready(&mut self) -> bool {
        T::is_ready(self)
    }

    fn read_reg(&mut self, reg: u8) -> Result<u8, Self::Error> {
        T::read_reg(self, reg)
    }

    fn write_reg(&mut self, reg: u8, value: u8) -> Result<(), Self::Error> {
        T::write_reg(self, reg, value)
    }

    fn update_reg(&mut self, reg: u8, mask: u8, value: u8) -> Result<(), Self::Error> {
        T::update_reg(self, reg, mask, value)
    }

    fn burst_read(&mut self, start: u8, buf: &mut [u8]) -> Result<(), Self::Error> {
        T::burst_read(self, start, buf)
    }

    fn burst_write(&mut self, start: u8, data: &[u8]) -> Result<(), Self::Error> {
        T::burst_write(self, start, data)
    }
}

/// `(old & !mask) | (value & mask)`
pub const fn merge_masked(old: u8, mask: u8, value: u8) -> u8 {
    (old & !mask) | (value & mask)
}

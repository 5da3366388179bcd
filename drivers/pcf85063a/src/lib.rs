//! Driver for the NXP PCF85063A I2C real-time clock
//!
//! Features:
//! - Read/write calendar time (packed BCD, 2000-2099)
//! - Oscillator-stop detection on every time read
//! - Start/stop of the clock
//! - Countdown timer as a 1 Hz one-channel counter alarm
//! - Offset (drift) correction and crystal load selection
//! - CLKOUT frequency and the free RAM byte
//!
//! ## Usage
//! ```ignore
//! let mut rtc = Pcf85063a::new_with_i2c(i2c);
//! rtc.init()?;
//! rtc.set_time(&CalendarTime::new(124, 6, 15, 8, 30, 0, 1))?;
//! rtc.set_alarm(60)?;
//!
//! // Later, from the interrupt handler's deferred work
//! if rtc.get_pending_interrupt()? {
//!     rtc.clear_pending_interrupt()?;
//! }
//! ```
//!
//! ## Logging
//! With the `defmt` feature enabled, failures and state changes are logged
//! through `defmt`. Without it, logging compiles away.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]
#![deny(warnings)]

#[macro_use]
mod fmt;

pub mod codec;
pub mod config;
pub mod device;
pub mod error;
pub mod registers;

#[cfg(test)]
mod sim;

pub use codec::{decode, encode, CodecError, RegisterImage};
pub use config::{CapacitorLoad, ClockOutFrequency, Config, OffsetMode};
pub use device::{Pcf85063a, TimerClock};
pub use error::Error;
pub use registers::DEFAULT_ADDRESS;
pub use rtc_core::{CalendarField, CalendarTime};

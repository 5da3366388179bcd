//! Hardware abstraction traits for real-time clock drivers
//!
//! This crate defines traits that abstract over hardware differences
//! between boards. BSPs implement these traits; drivers are written against
//! them so they can be exercised on the host with a simulated bus.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]
#![deny(warnings)]

pub mod bus;
pub mod counter;
pub mod i2c;

pub use bus::RegisterBus;
pub use counter::{Counter, CounterInfo};
pub use i2c::{I2cBusConfig, I2cRegisterBus};

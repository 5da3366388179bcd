//! Platform-agnostic calendar logic for real-time clock drivers
//!
//! This crate contains the calendar math shared by RTC register codecs. It
//! has NO hardware dependencies and is unit-tested on the host.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]
#![deny(warnings)]

pub mod calendar;
pub mod datetime;

pub use calendar::{day_of_year, days_in_month, is_leap_year};
pub use datetime::{CalendarError, CalendarField, CalendarTime};

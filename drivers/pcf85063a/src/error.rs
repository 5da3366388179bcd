//! Driver error types

use rtc_core::{CalendarError, CalendarField};

use crate::codec::CodecError;

/// PCF85063A driver errors
///
/// `E` is the transport error of the underlying [`RegisterBus`](hal_abstractions::RegisterBus).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Bus transaction failed
    Transport(E),
    /// Oscillator-stop flag set; time must be re-set before it can be trusted
    ClockIntegrity,
    /// Bus not ready or device did not answer the probe read
    NotReady,
    /// Calendar field out of range
    InvalidCalendarValue(CalendarField),
}

impl<E> From<CodecError> for Error<E> {
    fn from(e: CodecError) -> Self {
        match e {
            CodecError::ClockIntegrity => Error::ClockIntegrity,
        }
    }
}

impl<E> From<CalendarError> for Error<E> {
    fn from(e: CalendarError) -> Self {
        match e {
            CalendarError::InvalidValue(field) => Error::InvalidCalendarValue(field),
        }
    }
}

impl<E: core::fmt::Debug> core::fmt::Display for Error<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Transport(e) => write!(f, "Bus error: {:?}", e),
            Self::ClockIntegrity => write!(f, "Clock integrity error"),
            Self::NotReady => write!(f, "Device not ready"),
            Self::InvalidCalendarValue(field) => write!(f, "Invalid calendar value: {:?}", field),
        }
    }
}

// Implement core::error::Error for no_std compatibility
impl<E: core::fmt::Debug> core::error::Error for Error<E> {}

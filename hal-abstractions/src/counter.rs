//! Counter device trait
//!
//! A counter is a free-running tick source with alarm channels. RTC timers
//! are exposed through it so scheduling code does not depend on a specific
//! chip.

/// Static counter capabilities
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CounterInfo {
    /// Largest tick count an alarm accepts
    pub max_top_value: u32,
    /// Tick frequency in Hz
    pub freq_hz: u32,
    /// Number of alarm channels
    pub channels: u8,
}

/// Trait for counter devices with a single alarm channel
///
/// Implementors do not debounce or schedule interrupts; a pending alarm stays
/// pending until the alarm is cancelled or re-armed.
pub trait Counter {
    /// Error type for counter operations
    type Error;

    /// Capabilities of this counter
    fn info(&self) -> CounterInfo;

    /// Start counting
    fn start(&mut self) -> Result<(), Self::Error>;

    /// Stop counting
    fn stop(&mut self) -> Result<(), Self::Error>;

    /// Arm the alarm to fire after `ticks` ticks
    fn set_alarm(&mut self, ticks: u8) -> Result<(), Self::Error>;

    /// Disarm the alarm and clear its pending flag
    fn cancel_alarm(&mut self) -> Result<(), Self::Error>;

    /// Whether the alarm has fired and not yet been acknowledged
    fn pending_interrupt(&mut self) -> Result<bool, Self::Error>;
}

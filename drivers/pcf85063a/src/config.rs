//! Driver configuration

/// Oscillator load capacitance (Control_1 CAP_SEL)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CapacitorLoad {
    /// 7 pF
    Low,
    /// 12.5 pF
    High,
}

/// Offset correction cadence (Offset MODE)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OffsetMode {
    /// Correction every 2 hours, 4.34 ppm per step
    Normal,
    /// Correction every 4 minutes, 4.069 ppm per step
    Coarse,
}

/// CLKOUT pin frequency (Control_2 COF)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockOutFrequency {
    Hz32768 = 0x0,
    Hz16384 = 0x1,
    Hz8192 = 0x2,
    Hz4096 = 0x3,
    Hz2048 = 0x4,
    Hz1024 = 0x5,
    Hz1 = 0x6,
    /// CLKOUT held low
    Disabled = 0x7,
}

/// Settings applied by [`Pcf85063a::init`](crate::Pcf85063a::init)
///
/// `None` leaves the register as found, so a warm restart does not disturb
/// a calibrated clock.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Crystal load capacitance
    pub capacitor_load: Option<CapacitorLoad>,
    /// Offset correction cadence
    pub offset_mode: Option<OffsetMode>,
    /// Offset correction in steps, two's complement (-64..=63)
    pub offset_value: Option<i8>,
}

//! PCF85063A register map and bitfields
//!
//! Datasheet: NXP PCF85063A, section 8 "Registers".

/// Default 7-bit I2C address
pub const DEFAULT_ADDRESS: u8 = 0x51;

/// Register addresses
pub mod reg {
    pub const CTRL1: u8 = 0x00;
    pub const CTRL2: u8 = 0x01;
    pub const OFFSET: u8 = 0x02;
    pub const RAM_BYTE: u8 = 0x03;
    pub const SECONDS: u8 = 0x04;
    pub const MINUTES: u8 = 0x05;
    pub const HOURS: u8 = 0x06;
    pub const DAYS: u8 = 0x07;
    pub const WEEKDAYS: u8 = 0x08;
    pub const MONTHS: u8 = 0x09;
    pub const YEARS: u8 = 0x0a;
    pub const SECOND_ALARM: u8 = 0x0b;
    pub const MINUTE_ALARM: u8 = 0x0c;
    pub const HOUR_ALARM: u8 = 0x0d;
    pub const DAY_ALARM: u8 = 0x0e;
    pub const WEEKDAY_ALARM: u8 = 0x0f;
    pub const TIMER_VALUE: u8 = 0x10;
    pub const TIMER_MODE: u8 = 0x11;
}

/// Control_1 bits
pub mod ctrl1 {
    pub const EXT_TEST: u8 = 1 << 7;
    /// Set = clock stopped
    pub const STOP: u8 = 1 << 5;
    pub const SR: u8 = 1 << 4;
    pub const CIE: u8 = 1 << 2;
    pub const MODE_12_24: u8 = 1 << 1;
    /// Set = 12.5 pF load
    pub const CAP_SEL: u8 = 1 << 0;
}

/// Control_2 bits
pub mod ctrl2 {
    pub const AIE: u8 = 1 << 7;
    pub const AF: u8 = 1 << 6;
    pub const MI: u8 = 1 << 5;
    pub const HMI: u8 = 1 << 4;
    /// Timer flag, sticky until cleared by software
    pub const TF: u8 = 1 << 3;
    /// CLKOUT frequency selection
    pub const COF_MASK: u8 = 0b0000_0111;
}

/// Offset register bits
pub mod offset {
    /// Set = coarse mode (correction every 4 minutes)
    pub const MODE: u8 = 1 << 7;
    /// 7-bit two's complement correction
    pub const VALUE_MASK: u8 = 0x7f;
}

/// Time and date register masks
pub mod time {
    /// Oscillator stopped; clock integrity not guaranteed
    pub const SECONDS_OS: u8 = 1 << 7;
    pub const SECONDS_MASK: u8 = 0x7f;
    pub const MINUTES_MASK: u8 = 0x7f;
    pub const HOURS_AM_PM: u8 = 1 << 5;
    pub const HOURS_MASK: u8 = 0x3f;
    pub const DAYS_MASK: u8 = 0x3f;
    pub const WEEKDAYS_MASK: u8 = 0x07;
    pub const MONTHS_MASK: u8 = 0x1f;
}

/// Packed BCD nibbles
pub mod bcd {
    pub const LOWER_MASK: u8 = 0x0f;
    pub const UPPER_SHIFT: u8 = 4;
    /// Tens digit of seconds and minutes (3 bits)
    pub const UPPER_MASK_SEC_MIN: u8 = 0x70;
    /// Tens digit of hours and days (2 bits)
    pub const UPPER_MASK_HOUR_DAY: u8 = 0x30;
    /// Tens digit of months (1 bit)
    pub const UPPER_MASK_MONTH: u8 = 0x10;
    /// Tens digit of years (4 bits)
    pub const UPPER_MASK_YEAR: u8 = 0xf0;
}

/// Alarm register enable bits (active low: 0 = alarm enabled)
pub mod alarm {
    pub const SECOND_AEN: u8 = 1 << 7;
    pub const MINUTE_AEN: u8 = 1 << 7;
    pub const HOUR_AEN: u8 = 1 << 7;
    pub const HOUR_AM_PM: u8 = 1 << 5;
    pub const DAY_AEN: u8 = 1 << 7;
    pub const WEEKDAY_AEN: u8 = 1 << 7;
}

/// Timer_mode bits
pub mod timer {
    /// Timer clock frequency (TCF)
    pub const FREQ_MASK: u8 = (1 << 4) | (1 << 3);
    pub const FREQ_SHIFT: u8 = 3;
    pub const FREQ_4096_HZ: u8 = 0x0;
    pub const FREQ_64_HZ: u8 = 0x1;
    pub const FREQ_1_HZ: u8 = 0x2;
    pub const FREQ_1_60_HZ: u8 = 0x3;
    /// Timer enable (TE)
    pub const EN: u8 = 1 << 2;
    /// Timer interrupt enable (TIE)
    pub const INT_EN: u8 = 1 << 1;
    /// Interrupt generates a pulse instead of following TF (TI_TP)
    pub const INT_TI_TP: u8 = 1 << 0;
}

/// Number of calendar registers read and written in one burst
pub const TIME_REGISTER_COUNT: usize = (reg::YEARS - reg::SECONDS + 1) as usize;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_map_is_contiguous() {
        let map = [
            reg::CTRL1,
            reg::CTRL2,
            reg::OFFSET,
            reg::RAM_BYTE,
            reg::SECONDS,
            reg::MINUTES,
            reg::HOURS,
            reg::DAYS,
            reg::WEEKDAYS,
            reg::MONTHS,
            reg::YEARS,
            reg::SECOND_ALARM,
            reg::MINUTE_ALARM,
            reg::HOUR_ALARM,
            reg::DAY_ALARM,
            reg::WEEKDAY_ALARM,
            reg::TIMER_VALUE,
            reg::TIMER_MODE,
        ];
        for (expected, &addr) in map.iter().enumerate() {
            assert_eq!(usize::from(addr), expected);
        }
        assert_eq!(TIME_REGISTER_COUNT, 7);
    }

    #[test]
    fn test_timer_mode_one_hz_encoding() {
        assert_eq!(timer::FREQ_MASK, 0x18);
        assert_eq!(timer::FREQ_1_HZ << timer::FREQ_SHIFT, 0x10);
    }
}

//! Calendar codec
//!
//! Converts between [`CalendarTime`] and the seven packed-BCD time registers
//! (`Seconds` through `Years`). The registers hold a two-digit year; decoding
//! always places it in 2000-2099.

use rtc_core::CalendarTime;

use crate::registers::{bcd, time, TIME_REGISTER_COUNT};

/// `year` offset of the register era (2000 = 1900 + 100)
const CENTURY_OFFSET: u16 = 100;

/// Raw contents of the calendar registers in bus order: seconds, minutes,
/// hours, days, weekdays, months, years
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RegisterImage(pub [u8; TIME_REGISTER_COUNT]);

impl RegisterImage {
    pub const SECONDS: usize = 0;
    pub const MINUTES: usize = 1;
    pub const HOURS: usize = 2;
    pub const DAYS: usize = 3;
    pub const WEEKDAYS: usize = 4;
    pub const MONTHS: usize = 5;
    pub const YEARS: usize = 6;

    /// Wire bytes
    pub fn as_bytes(&self) -> &[u8; TIME_REGISTER_COUNT] {
        &self.0
    }

    /// Oscillator-stop flag of the seconds register
    pub fn oscillator_stopped(&self) -> bool {
        self.0[Self::SECONDS] & time::SECONDS_OS != 0
    }
}

impl From<[u8; TIME_REGISTER_COUNT]> for RegisterImage {
    fn from(bytes: [u8; TIME_REGISTER_COUNT]) -> Self {
        Self(bytes)
    }
}

/// Codec errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CodecError {
    /// Oscillator-stop flag set; the stored time is not trustworthy
    ClockIntegrity,
}

/// Encode a calendar time into the register image
///
/// Fields are not range checked: each BCD byte is masked to its register
/// width, so out-of-range values alias onto other bit patterns. Call
/// [`CalendarTime::validate`] first. The year is taken modulo 100.
///
/// The seconds byte never carries the oscillator-stop flag, so writing the
/// image clears it.
pub fn encode(t: &CalendarTime) -> RegisterImage {
    let year = (t.year % 100) as u8;

    RegisterImage([
        time::SECONDS_MASK & to_bcd(t.second),
        time::MINUTES_MASK & to_bcd(t.minute),
        time::HOURS_MASK & to_bcd(t.hour),
        time::DAYS_MASK & to_bcd(t.day_of_month),
        time::WEEKDAYS_MASK & t.weekday,
        time::MONTHS_MASK & to_bcd(t.month),
        to_bcd(year),
    ])
}

/// Decode the register image into a calendar time
///
/// `day_of_year` is recomputed from month, day and year; `dst` is always
/// `false`. Fails with [`CodecError::ClockIntegrity`] if the oscillator-stop
/// flag is set.
pub fn decode(image: &RegisterImage) -> Result<CalendarTime, CodecError> {
    if image.oscillator_stopped() {
        return Err(CodecError::ClockIntegrity);
    }

    let raw = &image.0;
    let year = u16::from(from_bcd(raw[RegisterImage::YEARS], bcd::UPPER_MASK_YEAR)) + CENTURY_OFFSET;

    Ok(CalendarTime::new(
        year,
        from_bcd(raw[RegisterImage::MONTHS], bcd::UPPER_MASK_MONTH),
        from_bcd(raw[RegisterImage::DAYS], bcd::UPPER_MASK_HOUR_DAY),
        from_bcd(raw[RegisterImage::HOURS], bcd::UPPER_MASK_HOUR_DAY),
        from_bcd(raw[RegisterImage::MINUTES], bcd::UPPER_MASK_SEC_MIN),
        from_bcd(raw[RegisterImage::SECONDS], bcd::UPPER_MASK_SEC_MIN),
        raw[RegisterImage::WEEKDAYS] & time::WEEKDAYS_MASK,
    ))
}

/// Two-digit packed BCD: `(value / 10) << 4 | value % 10`
pub(crate) const fn to_bcd(value: u8) -> u8 {
    ((value / 10) << bcd::UPPER_SHIFT) | (value % 10)
}

/// Packed BCD with the tens nibble limited to `upper_mask`
pub(crate) const fn from_bcd(raw: u8, upper_mask: u8) -> u8 {
    (raw & bcd::LOWER_MASK) + ((raw & upper_mask) >> bcd::UPPER_SHIFT) * 10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bcd_conversion() {
        assert_eq!(to_bcd(0), 0x00);
        assert_eq!(to_bcd(23), 0x23);
        assert_eq!(to_bcd(59), 0x59);
        assert_eq!(from_bcd(0x59, bcd::UPPER_MASK_SEC_MIN), 59);
        assert_eq!(from_bcd(0x23, bcd::UPPER_MASK_HOUR_DAY), 23);
        assert_eq!(from_bcd(0x99, bcd::UPPER_MASK_YEAR), 99);
    }

    #[test]
    fn test_encode_layout() {
        // 2024-12-31 23:59:58, Tuesday; month is stored 0-based
        let t = CalendarTime::new(124, 11, 31, 23, 59, 58, 2);
        assert_eq!(encode(&t).0, [0x58, 0x59, 0x23, 0x31, 0x02, 0x11, 0x24]);
    }

    #[test]
    fn test_encode_year_modulo_century() {
        let t = CalendarTime::new(105, 0, 1, 0, 0, 0, 6);
        assert_eq!(encode(&t).0[RegisterImage::YEARS], 0x05);
    }

    #[test]
    fn test_encode_masks_out_of_range_fields() {
        // No validation here: out-of-range values are masked, never spill
        let t = CalendarTime {
            second: 85,
            hour: 45,
            day_of_month: 45,
            weekday: 9,
            month: 25,
            ..CalendarTime::new(124, 0, 1, 0, 0, 0, 0)
        };
        let image = encode(&t);
        assert_eq!(image.0[RegisterImage::SECONDS], 0x85 & 0x7f);
        assert!(!image.oscillator_stopped());
        assert_eq!(image.0[RegisterImage::HOURS], 0x45 & 0x3f);
        assert_eq!(image.0[RegisterImage::DAYS], 0x45 & 0x3f);
        assert_eq!(image.0[RegisterImage::WEEKDAYS], 9 & 0x07);
        assert_eq!(image.0[RegisterImage::MONTHS], 0x25 & 0x1f);
    }

    #[test]
    fn test_decode_adds_century() {
        let image = RegisterImage([0x00, 0x00, 0x00, 0x01, 0x06, 0x00, 0x00]);
        let t = decode(&image).unwrap();
        assert_eq!(t.year, 100);
        assert_eq!(t.full_year(), 2000);
        assert_eq!(t.day_of_year, 0);
        assert!(!t.dst);
    }

    #[test]
    fn test_decode_ignores_bits_outside_field_masks() {
        // Top bits of minutes/hours/days/months are unused by the chip
        let image = RegisterImage([0x12, 0x80 | 0x34, 0xc0 | 0x21, 0xc0 | 0x15, 0xf8 | 0x03, 0xe0 | 0x10, 0x31]);
        let t = decode(&image).unwrap();
        assert_eq!((t.second, t.minute, t.hour), (12, 34, 21));
        assert_eq!((t.day_of_month, t.weekday, t.month), (15, 3, 10));
        assert_eq!(t.year, 131);
    }

    #[test]
    fn test_decode_rejects_oscillator_stop() {
        let image = RegisterImage([0x80 | 0x30, 0x15, 0x12, 0x01, 0x03, 0x02, 0x24]);
        assert_eq!(decode(&image), Err(CodecError::ClockIntegrity));
    }

    #[test]
    fn test_day_of_year_march_first() {
        // 2000 is leap: Jan(31) + Feb(29)
        let leap = decode(&RegisterImage([0, 0, 0, 0x01, 0x03, 0x02, 0x00])).unwrap();
        assert_eq!(leap.day_of_year, 60);

        let common = decode(&RegisterImage([0, 0, 0, 0x01, 0x04, 0x02, 0x01])).unwrap();
        assert_eq!(common.day_of_year, 59);
    }

    #[test]
    fn test_round_trip_across_register_era() {
        for year in [100u16, 104, 123, 124, 150, 199] {
            for month in 0..12u8 {
                let last_day = rtc_core::days_in_month(month, 1900 + year);
                for day in [1, 15, last_day] {
                    let t = CalendarTime::new(year, month, day, 23, 59, 59, day % 7);
                    let decoded = decode(&encode(&t)).unwrap();
                    assert_eq!(decoded, t);
                    assert_eq!(
                        decoded.day_of_year,
                        rtc_core::day_of_year(month, day, 1900 + year)
                    );
                }
            }
        }
    }
}

//! Broken-down calendar time
//!
//! `CalendarTime` mirrors the C `struct tm` layout RTC firmware usually
//! exchanges: years since 1900, 0-based months and a derived day of year.

use core::fmt::Write;

use heapless::String;

use crate::calendar::{
    civil_from_days, day_of_year, days_from_civil, days_in_month, SECONDS_PER_DAY,
};

/// Base year of the `year` field
pub const EPOCH_YEAR: u16 = 1900;

/// Lowest `year` value a two-digit RTC year register can hold (2000)
pub const MIN_YEAR: u16 = 100;

/// Highest `year` value a two-digit RTC year register can hold (2099)
pub const MAX_YEAR: u16 = 199;

/// Field of a [`CalendarTime`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CalendarField {
    Year,
    Month,
    DayOfMonth,
    Hour,
    Minute,
    Second,
    Weekday,
}

/// Calendar validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CalendarError {
    /// Field holds a value outside its documented range
    InvalidValue(CalendarField),
}

impl core::fmt::Display for CalendarError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidValue(field) => write!(f, "Invalid calendar value: {:?}", field),
        }
    }
}

impl core::error::Error for CalendarError {}

/// Calendar time with 1-second resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CalendarTime {
    /// Years since 1900
    pub year: u16,
    /// Month (0-11)
    pub month: u8,
    /// Day of month (1-31)
    pub day_of_month: u8,
    /// Hour (0-23)
    pub hour: u8,
    /// Minute (0-59)
    pub minute: u8,
    /// Second (0-59)
    pub second: u8,
    /// Day of week, 0 = Sunday
    pub weekday: u8,
    /// Day of year (0-365), derived from month/day/year
    pub day_of_year: u16,
    /// Daylight saving time flag, always `false`
    pub dst: bool,
}

impl CalendarTime {
    /// Create a calendar time, deriving `day_of_year`
    ///
    /// Out-of-range months produce a `day_of_year` of 0; run
    /// [`validate`](Self::validate) before trusting the value.
    pub fn new(
        year: u16,
        month: u8,
        day_of_month: u8,
        hour: u8,
        minute: u8,
        second: u8,
        weekday: u8,
    ) -> Self {
        let mut time = Self {
            year,
            month,
            day_of_month,
            hour,
            minute,
            second,
            weekday,
            day_of_year: 0,
            dst: false,
        };
        time.day_of_year = time.derived_day_of_year();
        time
    }

    /// Full Gregorian year (e.g. 2024)
    pub fn full_year(&self) -> u16 {
        EPOCH_YEAR.saturating_add(self.year)
    }

    /// Day of year computed from month, day and year
    pub fn derived_day_of_year(&self) -> u16 {
        if self.month > 11 || self.day_of_month == 0 {
            return 0;
        }
        day_of_year(self.month, self.day_of_month, self.full_year())
    }

    /// Check every field against its range
    ///
    /// The year must fall in 2000-2099, the window a two-digit year register
    /// represents.
    pub fn validate(&self) -> Result<(), CalendarError> {
        let invalid = |field| Err(CalendarError::InvalidValue(field));

        if !(MIN_YEAR..=MAX_YEAR).contains(&self.year) {
            return invalid(CalendarField::Year);
        }
        if self.month > 11 {
            return invalid(CalendarField::Month);
        }
        if self.day_of_month == 0 || self.day_of_month > days_in_month(self.month, self.full_year()) {
            return invalid(CalendarField::DayOfMonth);
        }
        if self.hour > 23 {
            return invalid(CalendarField::Hour);
        }
        if self.minute > 59 {
            return invalid(CalendarField::Minute);
        }
        if self.second > 59 {
            return invalid(CalendarField::Second);
        }
        if self.weekday > 6 {
            return invalid(CalendarField::Weekday);
        }
        Ok(())
    }

    /// Convert a Unix timestamp (UTC) to calendar time
    pub fn from_unix(unix_secs: u64) -> Self {
        let days = (unix_secs / SECONDS_PER_DAY) as i64;
        let secs_today = unix_secs % SECONDS_PER_DAY;

        let (year, month, day) = civil_from_days(days);
        // 1970-01-01 was a Thursday
        let weekday = ((days + 4) % 7) as u8;
        let year = u16::try_from(year - i64::from(EPOCH_YEAR)).unwrap_or(u16::MAX);

        Self::new(
            year,
            month,
            day,
            (secs_today / 3600) as u8,
            ((secs_today % 3600) / 60) as u8,
            (secs_today % 60) as u8,
            weekday,
        )
    }

    /// Convert to a Unix timestamp (UTC)
    ///
    /// Returns 0 for dates before the Unix epoch.
    pub fn to_unix(&self) -> u64 {
        let days = days_from_civil(i64::from(self.full_year()), self.month, self.day_of_month);
        let Ok(days) = u64::try_from(days) else {
            return 0;
        };

        days * SECONDS_PER_DAY
            + u64::from(self.hour) * 3600
            + u64::from(self.minute) * 60
            + u64::from(self.second)
    }

    /// Format as ISO8601, e.g. `2024-03-01T12:30:00Z`
    ///
    /// Years past 9999 print as 9999 and other fields past 99 print as 99, so
    /// the output always fits. Call [`validate`](Self::validate) first for a
    /// meaningful date.
    pub fn to_iso8601(&self) -> String<20> {
        let mut out = String::new();
        // Clamped widths total exactly 20 bytes, so the write cannot fail
        let _ = write!(
            out,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
            self.full_year().min(9999),
            self.month.saturating_add(1).min(99),
            self.day_of_month.min(99),
            self.hour.min(99),
            self.minute.min(99),
            self.second.min(99)
        );
        out
    }
}

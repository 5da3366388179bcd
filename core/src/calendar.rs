//! Calendar date conversions
//!
//! Leap-year and day-of-year rules used by RTC register codecs, plus the O(1)
//! civil-date algorithms from Howard Hinnant used for Unix time conversions.
//! Reference: http://howardhinnant.github.io/date_algorithms.html
//!
//! Months are 0-based throughout this module (January = 0).

/// Cumulative days before each month, non-leap and leap year variants.
const DAYS_BEFORE_MONTH: [[u16; 12]; 2] = [
    [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334],
    [0, 31, 60, 91, 121, 152, 182, 213, 244, 274, 305, 335],
];

const DAYS_IN_MONTH: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Seconds in one civil day
pub const SECONDS_PER_DAY: u64 = 86_400;

/// Check if year is a leap year (Gregorian calendar)
///
/// - Divisible by 4: leap year
/// - EXCEPT divisible by 100: not a leap year
/// - EXCEPT divisible by 400: leap year
///
/// Examples:
/// - 2000: leap (divisible by 400)
/// - 2004: leap (divisible by 4, not by 100)
/// - 2100: NOT leap (divisible by 100 but not 400)
pub fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// 0-based day of the year for a 0-based month and 1-based day of month.
///
/// Returns 0 for a month outside `0..12`. A `day_of_month` of 0 is treated
/// as 1.
pub fn day_of_year(month: u8, day_of_month: u8, year: u16) -> u16 {
    let table = &DAYS_BEFORE_MONTH[usize::from(is_leap_year(year))];
    table
        .get(usize::from(month))
        .map_or(0, |before| (before + u16::from(day_of_month)).saturating_sub(1))
}

/// Number of days in a 0-based month
///
/// Returns 0 for months outside `0..12`.
pub fn days_in_month(month: u8, year: u16) -> u8 {
    match month {
        1 if is_leap_year(year) => 29,
        0..=11 => DAYS_IN_MONTH[usize::from(month)],
        _ => 0,
    }
}

/// Convert days since Unix epoch to civil date (year, 0-based month, day)
///
/// Howard Hinnant's civil_from_days algorithm.
pub fn civil_from_days(days_since_epoch: i64) -> (i64, u8, u8) {
    // Shift epoch from 1970-01-01 to 0000-03-01 so the leap day ends the year
    let z = days_since_epoch + 719_468;

    // 400-year eras
    let era = (if z >= 0 { z } else { z - 146_096 }) / 146_097;
    let doe = (z - era * 146_097) as u32; // [0, 146096]
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365; // [0, 399]
    let y = i64::from(yoe) + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100); // [0, 365]

    // March-based month [0, 11]
    let mp = (5 * doy + 2) / 153;
    let d = (doy - (153 * mp + 2) / 5 + 1) as u8;
    let m = (if mp < 10 { mp + 2 } else { mp - 10 }) as u8;

    let year = if m <= 1 { y + 1 } else { y };
    (year, m, d)
}

/// Convert civil date (year, 0-based month, day) to days since Unix epoch
///
/// Howard Hinnant's days_from_civil algorithm.
pub fn days_from_civil(year: i64, month: u8, day: u8) -> i64 {
    let m = i64::from(month) + 1;
    let d = i64::from(day);

    // March = 0, February = 11
    let (y, m) = if m <= 2 { (year - 1, m + 9) } else { (year, m - 3) };

    let era = (if y >= 0 { y } else { y - 399 }) / 400;
    let yoe = y - era * 400; // [0, 399]
    let doy = (153 * m + 2) / 5 + d - 1; // [0, 365]
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy; // [0, 146096]

    era * 146_097 + doe - 719_468
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leap_year() {
        assert!(is_leap_year(2000)); // Divisible by 400
        assert!(is_leap_year(2004)); // Divisible by 4
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(2001));
        assert!(!is_leap_year(2100)); // Divisible by 100, not 400
        assert!(is_leap_year(2400));
    }

    #[test]
    fn test_day_of_year_march_first() {
        assert_eq!(day_of_year(2, 1, 2000), 60);
        assert_eq!(day_of_year(2, 1, 2001), 59);
    }

    #[test]
    fn test_day_of_year_bounds() {
        assert_eq!(day_of_year(0, 1, 2023), 0);
        assert_eq!(day_of_year(11, 31, 2023), 364);
        assert_eq!(day_of_year(11, 31, 2024), 365);
    }

    #[test]
    fn test_day_of_year_out_of_range_inputs() {
        assert_eq!(day_of_year(0, 0, 2000), 0);
        assert_eq!(day_of_year(2, 0, 2000), 59);
        assert_eq!(day_of_year(12, 1, 2000), 0);
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(1, 2024), 29);
        assert_eq!(days_in_month(1, 2100), 28);
        assert_eq!(days_in_month(3, 2023), 30);
        assert_eq!(days_in_month(11, 2023), 31);
        assert_eq!(days_in_month(12, 2023), 0);
    }

    #[test]
    fn test_civil_round_trip() {
        // 1970-01-01, 2000-03-01, 2024-02-29, 2099-12-31
        let dates = [(1970, 0, 1), (2000, 2, 1), (2024, 1, 29), (2099, 11, 31)];
        for &(y, m, d) in &dates {
            let days = days_from_civil(y, m, d);
            assert_eq!(civil_from_days(days), (y, m, d), "Round trip failed for {y}-{m}-{d}");
        }
        assert_eq!(days_from_civil(1970, 0, 1), 0);
        assert_eq!(days_from_civil(2000, 0, 1), 10_957);
    }
}

//! Validated civil dates, Gregorian month lengths, and local-time
//! offsetting against the UT Julian Day.

use crate::error::TimeError;
use crate::julian::{calendar_to_jd, jd_to_calendar};

/// Gregorian leap-year test (4/100/400 rule).
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a Gregorian month. Returns 0 for an invalid month.
pub fn days_in_month(month: u32, year: i32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// A validated Gregorian calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CivilDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl CivilDate {
    /// Create a civil date, rejecting dates that do not exist.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, TimeError> {
        if !(1..=12).contains(&month) || day < 1 || day > days_in_month(month, year) {
            return Err(TimeError::InvalidDate { year, month, day });
        }
        Ok(Self { year, month, day })
    }
}

impl std::fmt::Display for CivilDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// JD (UT) of local civil midnight for a date at a fixed UTC offset.
///
/// `tz_offset_hours` is east-positive (e.g. 5.75 for Nepal).
pub fn local_midnight_jd_ut(date: CivilDate, tz_offset_hours: f64) -> f64 {
    calendar_to_jd(date.year, date.month, date.day as f64) - tz_offset_hours / 24.0
}

/// Convert a JD (UT) to a local civil date plus hour and minute.
///
/// Minutes are rounded to the nearest whole minute, carrying into the
/// hour and date as needed.
pub fn jd_ut_to_local_hm(jd_ut: f64, tz_offset_hours: f64) -> (CivilDate, u32, u32) {
    let local_jd = jd_ut + tz_offset_hours / 24.0;
    // Round to the nearest minute before splitting, so 23:59:59.7
    // lands on the next day instead of printing as 23:60.
    let rounded = (local_jd * 1440.0).round() / 1440.0;
    let (year, month, day_frac) = jd_to_calendar(rounded);
    let day = day_frac.floor() as u32;
    let minutes_of_day = ((day_frac - day as f64) * 1440.0).round() as u32;
    let date = CivilDate { year, month, day };
    (date, minutes_of_day / 60, minutes_of_day % 60)
}

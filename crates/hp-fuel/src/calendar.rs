//! Fixed reporting calendar.
//!
//! Reports always cover the 365 days of 2019 (February has 28 days), whatever
//! year the log was recorded in.

use chrono::{Datelike, NaiveDate};

pub const CALENDAR_YEAR: i32 = 2019;
pub const DAYS_IN_YEAR: usize = 365;

/// Every day of the reporting year, in order.
pub fn calendar_days() -> Vec<NaiveDate> {
    NaiveDate::from_ymd_opt(CALENDAR_YEAR, 1, 1)
        .map(|first| first.iter_days().take(DAYS_IN_YEAR).collect())
        .unwrap_or_default()
}

/// Zero-based position of `(month, day)` in the reporting year, or `None` if
/// that date does not exist in it (Feb 29, Apr 31, month 13, ...).
pub fn day_index(month: u32, day: u32) -> Option<usize> {
    NaiveDate::from_ymd_opt(CALENDAR_YEAR, month, day).map(|date| date.ordinal0() as usize)
}

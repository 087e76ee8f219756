//! Calendar helpers shared by the period rules.

use chrono::{Datelike, Days, NaiveDate};

use crate::errors::{ExpenseError, Result};

/// Format used for every persisted or user-supplied calendar date.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a plain `YYYY-MM-DD` calendar date.
pub fn parse_iso_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), ISO_DATE_FORMAT)
        .map_err(|_| ExpenseError::InvalidDate(raw.to_string()))
}

/// First day of the month containing `date`.
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// January 1 of the year containing `date`.
pub fn year_start(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), 1, 1).unwrap_or(date)
}

/// Most recent Sunday on or before `date`, saturating at [`NaiveDate::MIN`].
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let delta = u64::from(date.weekday().num_days_from_sunday());
    date.checked_sub_days(Days::new(delta))
        .unwrap_or(NaiveDate::MIN)
}

/// Moves `date` by whole months, clamping the day to the target month's length.
pub fn shift_month(date: NaiveDate, months: i32) -> NaiveDate {
    let index = date.year() * 12 + date.month0() as i32 + months;
    let year = index.div_euclid(12);
    let month = index.rem_euclid(12) as u32 + 1;
    let day = date.day().min(days_in_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(date)
}

/// Moves `date` by whole years, clamping February 29 when needed.
pub fn shift_year(date: NaiveDate, years: i32) -> NaiveDate {
    shift_month(date, years * 12)
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first_next| first_next.pred_opt())
        .map(|last| last.day())
        .unwrap_or(28)
}

//! Inclusive date windows used to slice the expense collection.

use std::fmt;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::{ExpenseError, Result};

/// A pair of calendar dates, both inclusive, with `end >= start`.
///
/// Records carry no time of day, so comparing whole dates is equivalent to
/// comparing a start-of-day `start` against an end-of-day `end`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if end < start {
            return Err(ExpenseError::InvalidWindow(format!(
                "window end {end} is before start {start}"
            )));
        }
        Ok(Self { start, end })
    }

    /// Window covering a single day.
    pub fn single_day(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    /// Everything from the earliest representable date up to `end`.
    pub fn up_to(end: NaiveDate) -> Self {
        Self {
            start: NaiveDate::MIN,
            end,
        }
    }

    /// The degenerate window used when there is nothing to compare against.
    pub fn degenerate() -> Self {
        Self::single_day(NaiveDate::MIN)
    }

    pub fn is_degenerate(&self) -> bool {
        *self == Self::degenerate()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Number of calendar days covered, counting both ends.
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// The window of equal length ending the day before this one starts.
    ///
    /// Saturates at the earliest representable date.
    pub fn preceding(&self) -> Self {
        let end = self.start.pred_opt().unwrap_or(NaiveDate::MIN);
        let start = end
            .checked_sub_signed(Duration::days(self.days() - 1))
            .unwrap_or(NaiveDate::MIN);
        Self { start, end }
    }
}

impl fmt::Display for DateWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} .. {}", self.start, self.end)
    }
}

/// The resolved current window and the window it is compared against.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PeriodWindows {
    pub current: DateWindow,
    pub previous: DateWindow,
}

impl PeriodWindows {
    pub fn new(current: DateWindow, previous: DateWindow) -> Self {
        Self { current, previous }
    }

    /// False when the previous window is the degenerate placeholder.
    pub fn has_comparison(&self) -> bool {
        !self.previous.is_degenerate()
    }
}

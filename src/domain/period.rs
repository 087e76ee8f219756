//! Period selections as chosen in the dashboard filter.

use std::fmt;

use chrono::NaiveDate;

use crate::domain::common::parse_iso_date;
use crate::domain::window::DateWindow;
use crate::errors::Result;

/// Trailing day counts offered by the filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrailingDays {
    Seven,
    Fourteen,
    Thirty,
    Sixty,
    Ninety,
}

impl TrailingDays {
    pub const ALL: [TrailingDays; 5] = [
        TrailingDays::Seven,
        TrailingDays::Fourteen,
        TrailingDays::Thirty,
        TrailingDays::Sixty,
        TrailingDays::Ninety,
    ];

    pub fn days(self) -> i64 {
        match self {
            TrailingDays::Seven => 7,
            TrailingDays::Fourteen => 14,
            TrailingDays::Thirty => 30,
            TrailingDays::Sixty => 60,
            TrailingDays::Ninety => 90,
        }
    }

    fn from_days(days: i64) -> Option<Self> {
        TrailingDays::ALL.into_iter().find(|value| value.days() == days)
    }
}

/// An explicit inclusive range chosen by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CustomRange {
    window: DateWindow,
}

impl CustomRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        Ok(Self {
            window: DateWindow::new(start, end)?,
        })
    }

    pub fn parse(start: &str, end: &str) -> Result<Self> {
        Self::new(parse_iso_date(start)?, parse_iso_date(end)?)
    }

    pub fn start(&self) -> NaiveDate {
        self.window.start
    }

    pub fn end(&self) -> NaiveDate {
        self.window.end
    }

    pub fn window(&self) -> DateWindow {
        self.window
    }
}

/// Which slice of time the dashboard is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PeriodSelection {
    All,
    ThisWeek,
    #[default]
    ThisMonth,
    ThisYear,
    LastDays(TrailingDays),
    LastMonth,
    LastYear,
    Custom(CustomRange),
}

impl PeriodSelection {
    /// Interprets a symbolic tag. Unknown tags, and `custom` (which needs
    /// explicit bounds), fall back to [`PeriodSelection::All`].
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim() {
            "all" => PeriodSelection::All,
            "thisWeek" => PeriodSelection::ThisWeek,
            "thisMonth" => PeriodSelection::ThisMonth,
            "thisYear" => PeriodSelection::ThisYear,
            "lastMonth" => PeriodSelection::LastMonth,
            "lastYear" => PeriodSelection::LastYear,
            other => other
                .strip_suffix("days")
                .and_then(|count| count.parse::<i64>().ok())
                .and_then(TrailingDays::from_days)
                .map(PeriodSelection::LastDays)
                .unwrap_or_else(|| {
                    tracing::debug!(tag = other, "unrecognised period tag, showing all time");
                    PeriodSelection::All
                }),
        }
    }

    /// Interprets the filter state as the UI holds it: a tag plus optional
    /// ISO boundary strings used only when the tag is `custom`.
    ///
    /// A custom selection with missing, unparseable or inverted bounds
    /// resolves to [`PeriodSelection::All`] rather than failing.
    pub fn from_state(tag: &str, start: Option<&str>, end: Option<&str>) -> Self {
        if tag.trim() != "custom" {
            return Self::from_tag(tag);
        }
        let (Some(start), Some(end)) = (
            start.filter(|s| !s.trim().is_empty()),
            end.filter(|s| !s.trim().is_empty()),
        ) else {
            tracing::warn!("custom period requested without both dates, showing all time");
            return PeriodSelection::All;
        };
        match CustomRange::parse(start, end) {
            Ok(range) => PeriodSelection::Custom(range),
            Err(err) => {
                tracing::warn!(%err, "invalid custom period, showing all time");
                PeriodSelection::All
            }
        }
    }

    /// The symbolic tag for this selection.
    pub fn tag(&self) -> &'static str {
        match self {
            PeriodSelection::All => "all",
            PeriodSelection::ThisWeek => "thisWeek",
            PeriodSelection::ThisMonth => "thisMonth",
            PeriodSelection::ThisYear => "thisYear",
            PeriodSelection::LastDays(TrailingDays::Seven) => "7days",
            PeriodSelection::LastDays(TrailingDays::Fourteen) => "14days",
            PeriodSelection::LastDays(TrailingDays::Thirty) => "30days",
            PeriodSelection::LastDays(TrailingDays::Sixty) => "60days",
            PeriodSelection::LastDays(TrailingDays::Ninety) => "90days",
            PeriodSelection::LastMonth => "lastMonth",
            PeriodSelection::LastYear => "lastYear",
            PeriodSelection::Custom(_) => "custom",
        }
    }

    pub fn label(&self) -> String {
        match self {
            PeriodSelection::All => "All Time".into(),
            PeriodSelection::ThisWeek => "This Week".into(),
            PeriodSelection::ThisMonth => "This Month".into(),
            PeriodSelection::ThisYear => "This Year".into(),
            PeriodSelection::LastDays(days) => format!("Last {} Days", days.days()),
            PeriodSelection::LastMonth => "Last Month".into(),
            PeriodSelection::LastYear => "Last Year".into(),
            PeriodSelection::Custom(range) => {
                format!("Custom Period ({} to {})", range.start(), range.end())
            }
        }
    }
}

impl fmt::Display for PeriodSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

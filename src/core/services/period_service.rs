use chrono::{Days, NaiveDate};

use crate::core::time::Clock;
use crate::domain::common::{month_start, shift_month, shift_year, week_start, year_start};
use crate::domain::{DateWindow, PeriodSelection, PeriodWindows};

/// Resolves a period selection into the current window and its comparison window.
pub struct PeriodService;

impl PeriodService {
    /// Computes the windows for `selection` as seen on `reference`.
    ///
    /// Every rule except `All` yields a previous window that ends exactly one
    /// day before the current window starts. `All` pairs the whole history up
    /// to `reference` with a degenerate previous window.
    pub fn resolve(selection: &PeriodSelection, reference: NaiveDate) -> PeriodWindows {
        let windows = match selection {
            PeriodSelection::All => {
                PeriodWindows::new(DateWindow::up_to(reference), DateWindow::degenerate())
            }
            PeriodSelection::ThisWeek => {
                let start = week_start(reference);
                PeriodWindows::new(
                    window(start, reference),
                    window(days_back(start, 7), day_before(start)),
                )
            }
            PeriodSelection::ThisMonth => {
                let start = month_start(reference);
                PeriodWindows::new(
                    window(start, reference),
                    window(shift_month(start, -1), day_before(start)),
                )
            }
            PeriodSelection::ThisYear => {
                let start = year_start(reference);
                PeriodWindows::new(
                    window(start, reference),
                    window(shift_year(start, -1), day_before(start)),
                )
            }
            PeriodSelection::LastDays(days) => {
                let current = window(days_back(reference, days.days() - 1), reference);
                PeriodWindows::new(current, current.preceding())
            }
            PeriodSelection::LastMonth => {
                let this_month = month_start(reference);
                let start = shift_month(this_month, -1);
                PeriodWindows::new(
                    window(start, day_before(this_month)),
                    window(shift_month(start, -1), day_before(start)),
                )
            }
            PeriodSelection::LastYear => {
                let this_year = year_start(reference);
                let start = shift_year(this_year, -1);
                PeriodWindows::new(
                    window(start, day_before(this_year)),
                    window(shift_year(start, -1), day_before(start)),
                )
            }
            PeriodSelection::Custom(range) => {
                let current = range.window();
                PeriodWindows::new(current, current.preceding())
            }
        };
        tracing::debug!(
            period = selection.tag(),
            %reference,
            current = %windows.current,
            previous = %windows.previous,
            "resolved period windows"
        );
        windows
    }

    /// Resolves against the clock's current date.
    pub fn resolve_now(selection: &PeriodSelection, clock: &dyn Clock) -> PeriodWindows {
        Self::resolve(selection, clock.today())
    }
}

fn window(start: NaiveDate, end: NaiveDate) -> DateWindow {
    DateWindow {
        start: start.min(end),
        end,
    }
}

fn day_before(date: NaiveDate) -> NaiveDate {
    date.pred_opt().unwrap_or(NaiveDate::MIN)
}

fn days_back(date: NaiveDate, days: i64) -> NaiveDate {
    date.checked_sub_days(Days::new(days.max(0) as u64))
        .unwrap_or(NaiveDate::MIN)
}

use chrono::NaiveDate;

use crate::core::services::PeriodService;
use crate::domain::{
    CategoryComparison, CategoryTotals, ChangeDirection, DateWindow, Expense, ExpenseSummary,
    PercentageChange, PeriodReport, PeriodSelection,
};

/// Filters and aggregates expenses for the dashboard summary.
pub struct SummaryService;

impl SummaryService {
    /// Keeps the records dated within `window`, both ends inclusive, in input order.
    pub fn filter_by_window<'a, I>(records: I, window: &DateWindow) -> Vec<&'a Expense>
    where
        I: IntoIterator<Item = &'a Expense>,
    {
        records
            .into_iter()
            .filter(|expense| window.contains(expense.date))
            .collect()
    }

    /// Totals the records overall and per literal category key.
    ///
    /// Unknown category names get their own bucket.
    pub fn summarize<'a, I>(records: I) -> ExpenseSummary
    where
        I: IntoIterator<Item = &'a Expense>,
    {
        records
            .into_iter()
            .fold(ExpenseSummary::default(), |mut summary, expense| {
                summary.total += expense.amount;
                summary.count += 1;
                *summary
                    .by_category
                    .entry(expense.category.clone())
                    .or_insert(0.0) += expense.amount;
                summary
            })
    }

    /// Describes the change from `previous` to `current`.
    pub fn compare(current: f64, previous: f64) -> PercentageChange {
        if previous == 0.0 {
            return if current > 0.0 {
                PercentageChange::New
            } else {
                PercentageChange::NotApplicable
            };
        }
        PercentageChange::Change {
            percent: (current - previous) / previous * 100.0,
            direction: ChangeDirection::between(current, previous),
        }
    }

    /// Orders the union of both periods' categories by current amount, largest first.
    ///
    /// Ties, including categories absent from the current period, keep
    /// alphabetical order.
    pub fn rank_categories(
        current: &CategoryTotals,
        previous: &CategoryTotals,
    ) -> Vec<CategoryComparison> {
        let max_current = current.values().copied().fold(1.0_f64, f64::max);
        let mut names: Vec<&String> = current.keys().chain(previous.keys()).collect();
        names.sort();
        names.dedup();

        let mut rows: Vec<CategoryComparison> = names
            .into_iter()
            .map(|name| {
                let current_amount = current.get(name).copied().unwrap_or(0.0);
                let previous_amount = previous.get(name).copied().unwrap_or(0.0);
                CategoryComparison {
                    category: name.clone(),
                    current: current_amount,
                    previous: previous_amount,
                    change: Self::compare(current_amount, previous_amount),
                    direction: ChangeDirection::between(current_amount, previous_amount),
                    share_of_max: current_amount / max_current,
                }
            })
            .collect();
        rows.sort_by(|a, b| b.current.total_cmp(&a.current));
        rows
    }

    /// Resolves `selection` on `reference` and builds the full comparison report.
    pub fn report(
        records: &[Expense],
        selection: &PeriodSelection,
        reference: NaiveDate,
    ) -> PeriodReport {
        let windows = PeriodService::resolve(selection, reference);
        let current = Self::summarize(Self::filter_by_window(records, &windows.current));
        let previous = Self::summarize(Self::filter_by_window(records, &windows.previous));
        let categories = Self::rank_categories(&current.by_category, &previous.by_category);
        tracing::debug!(
            period = selection.tag(),
            current_total = current.total,
            previous_total = previous.total,
            categories = categories.len(),
            "summarised expenses"
        );
        PeriodReport {
            selection: *selection,
            windows,
            total_change: Self::compare(current.total, previous.total),
            total_direction: ChangeDirection::between(current.total, previous.total),
            current,
            previous,
            categories,
        }
    }
}

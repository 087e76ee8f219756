//! Aggregates produced when summarising expenses over a window.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::period::PeriodSelection;
use crate::domain::window::PeriodWindows;

/// Summed amount per literal category key. Only categories with at least one
/// matching expense appear.
pub type CategoryTotals = BTreeMap<String, f64>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExpenseSummary {
    pub total: f64,
    pub count: usize,
    pub by_category: CategoryTotals,
}

impl ExpenseSummary {
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Amount for `category`, zero when absent.
    pub fn category_total(&self, category: &str) -> f64 {
        self.by_category.get(category).copied().unwrap_or(0.0)
    }
}

/// Whether spending went up relative to the comparison window.
///
/// Equal amounts count as a decrease.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChangeDirection {
    Increase,
    Decrease,
}

impl ChangeDirection {
    pub fn between(current: f64, previous: f64) -> Self {
        if current > previous {
            ChangeDirection::Increase
        } else {
            ChangeDirection::Decrease
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ChangeDirection::Increase => "increase",
            ChangeDirection::Decrease => "decrease",
        }
    }
}

impl fmt::Display for ChangeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Period-over-period change. Never carries an infinite or NaN percentage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PercentageChange {
    /// Both periods are zero.
    NotApplicable,
    /// Spending appeared where the previous period had none.
    New,
    Change {
        percent: f64,
        direction: ChangeDirection,
    },
}

impl PercentageChange {
    pub fn percent(&self) -> Option<f64> {
        match self {
            PercentageChange::Change { percent, .. } => Some(*percent),
            _ => None,
        }
    }
}

impl fmt::Display for PercentageChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PercentageChange::NotApplicable => f.write_str("N/A"),
            PercentageChange::New => f.write_str("N/A (new expense)"),
            PercentageChange::Change { percent, .. } => write!(f, "{percent:+.2}%"),
        }
    }
}

/// One row of the per-category comparison, in display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryComparison {
    pub category: String,
    pub current: f64,
    pub previous: f64,
    pub change: PercentageChange,
    pub direction: ChangeDirection,
    /// Current amount relative to the largest current category, in `0.0..=1.0`.
    pub share_of_max: f64,
}

/// Everything the dashboard needs for one period selection.
#[derive(Debug, Clone)]
pub struct PeriodReport {
    pub selection: PeriodSelection,
    pub windows: PeriodWindows,
    pub current: ExpenseSummary,
    pub previous: ExpenseSummary,
    pub total_change: PercentageChange,
    pub total_direction: ChangeDirection,
    pub categories: Vec<CategoryComparison>,
}

impl PeriodReport {
    pub fn has_comparison(&self) -> bool {
        self.windows.has_comparison()
    }
}

//! Pure domain models: expenses, categories, period selections and windows.
//! No I/O and no storage; only data types and their invariants.

pub mod category;
pub mod common;
pub mod expense;
pub mod period;
pub mod summary;
pub mod window;

pub use category::{category_color, ExpenseCategory, FALLBACK_CATEGORY_COLOR};
pub use common::{parse_iso_date, ISO_DATE_FORMAT};
pub use expense::{Expense, ExpenseDraft, ExpenseId};
pub use period::{CustomRange, PeriodSelection, TrailingDays};
pub use summary::{
    CategoryComparison, CategoryTotals, ChangeDirection, ExpenseSummary, PercentageChange,
    PeriodReport,
};
pub use window::{DateWindow, PeriodWindows};

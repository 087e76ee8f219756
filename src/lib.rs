#![doc(test(attr(deny(warnings))))]

//! Expense Core records personal expenses and compares spending between a
//! selected period and the period immediately before it.
//!
//! ```
//! use chrono::NaiveDate;
//! use expense_core::core::services::SummaryService;
//! use expense_core::domain::{Expense, PeriodSelection};
//!
//! let records = vec![
//!     Expense::new("Groceries", 100.0, NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(), "Food"),
//!     Expense::new("Groceries", 50.0, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(), "Food"),
//! ];
//! let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
//! let report = SummaryService::report(&records, &PeriodSelection::ThisMonth, today);
//! assert_eq!(report.current.total, 100.0);
//! assert_eq!(report.previous.total, 50.0);
//! assert_eq!(report.total_change.to_string(), "+100.00%");
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod currency;
pub mod domain;
pub mod errors;
pub mod storage;
pub mod utils;

use std::sync::Once;

pub use errors::{ExpenseError, Result};

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("Expense Core tracing initialized.");
    });
}

/// One-line description of the build, stamped by `build.rs`.
pub fn build_info() -> String {
    format!(
        "expense_core {} ({} {}, built {} for {} [{}])",
        env!("CARGO_PKG_VERSION"),
        env!("EXPENSE_CORE_BUILD_HASH"),
        env!("EXPENSE_CORE_BUILD_STATUS"),
        env!("EXPENSE_CORE_BUILD_TIMESTAMP"),
        env!("EXPENSE_CORE_BUILD_TARGET"),
        env!("EXPENSE_CORE_BUILD_PROFILE"),
    )
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }

    #[test]
    fn build_info_names_the_crate() {
        assert!(super::build_info().starts_with("expense_core "));
    }
}

//! Business logic over the domain types. No terminal I/O; persistence only
//! through the injected [`crate::storage::ExpenseStore`].

pub mod expense_book;
pub mod services;
pub mod time;

pub use expense_book::ExpenseBook;
pub use time::{Clock, FixedClock, SystemClock};

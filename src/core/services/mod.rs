pub mod expense_service;
pub mod period_service;
pub mod summary_service;

pub use expense_service::ExpenseService;
pub use period_service::PeriodService;
pub use summary_service::SummaryService;

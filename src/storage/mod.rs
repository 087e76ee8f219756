pub mod json_backend;
pub mod memory;

use crate::domain::Expense;
use crate::errors::Result;

/// Read/write access to wherever the expense collection lives.
///
/// The whole collection is loaded and saved as one snapshot.
pub trait ExpenseStore: Send + Sync {
    fn load(&self) -> Result<Vec<Expense>>;
    fn save(&self, expenses: &[Expense]) -> Result<()>;
}

pub use json_backend::JsonExpenseStore;
pub use memory::MemoryExpenseStore;

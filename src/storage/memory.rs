use std::sync::{Mutex, PoisonError};

use crate::domain::Expense;
use crate::errors::Result;

use super::ExpenseStore;

/// Keeps the snapshot in process memory; nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryExpenseStore {
    snapshot: Mutex<Vec<Expense>>,
}

impl MemoryExpenseStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_expenses(expenses: Vec<Expense>) -> Self {
        Self {
            snapshot: Mutex::new(expenses),
        }
    }
}

impl ExpenseStore for MemoryExpenseStore {
    fn load(&self) -> Result<Vec<Expense>> {
        let guard = self.snapshot.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(guard.clone())
    }

    fn save(&self, expenses: &[Expense]) -> Result<()> {
        let mut guard = self.snapshot.lock().unwrap_or_else(PoisonError::into_inner);
        *guard = expenses.to_vec();
        Ok(())
    }
}

//! Business logic helpers for managing recorded expenses.

use crate::domain::{Expense, ExpenseDraft, ExpenseId};
use crate::errors::{ExpenseError, Result};

/// Provides validated CRUD helpers over an expense collection.
pub struct ExpenseService;

impl ExpenseService {
    /// Validates the draft, assigns a fresh id and appends the record.
    pub fn add(expenses: &mut Vec<Expense>, draft: ExpenseDraft) -> Result<ExpenseId> {
        draft.validate()?;
        let id = ExpenseId::generate();
        expenses.push(Expense::from_draft(id.clone(), draft));
        Ok(id)
    }

    /// Replaces every field except the id of the expense identified by `id`.
    pub fn update(expenses: &mut [Expense], id: &ExpenseId, draft: ExpenseDraft) -> Result<()> {
        draft.validate()?;
        let slot = expenses
            .iter_mut()
            .find(|expense| &expense.id == id)
            .ok_or_else(|| ExpenseError::NotFound(id.to_string()))?;
        *slot = Expense::from_draft(id.clone(), draft);
        Ok(())
    }

    /// Removes the expense identified by `id`, returning the removed record.
    pub fn remove(expenses: &mut Vec<Expense>, id: &ExpenseId) -> Result<Expense> {
        let index = expenses
            .iter()
            .position(|expense| &expense.id == id)
            .ok_or_else(|| ExpenseError::NotFound(id.to_string()))?;
        Ok(expenses.remove(index))
    }

    pub fn find<'a>(expenses: &'a [Expense], id: &ExpenseId) -> Option<&'a Expense> {
        expenses.iter().find(|expense| &expense.id == id)
    }

    /// Orders records by date, latest first; same-day records keep their input order.
    pub fn latest_first<'a, I>(records: I) -> Vec<&'a Expense>
    where
        I: IntoIterator<Item = &'a Expense>,
    {
        let mut sorted: Vec<&Expense> = records.into_iter().collect();
        sorted.sort_by(|a, b| b.date.cmp(&a.date));
        sorted
    }
}

use chrono::NaiveDate;

use crate::core::services::{ExpenseService, PeriodService, SummaryService};
use crate::domain::{Expense, ExpenseDraft, ExpenseId, PeriodReport, PeriodSelection};
use crate::errors::Result;
use crate::storage::ExpenseStore;

/// Facade that owns the expense collection and mirrors it to a store.
///
/// Every mutation is followed by a full snapshot write. A failed write is
/// logged and otherwise ignored; the in-memory collection stays authoritative.
pub struct ExpenseBook {
    expenses: Vec<Expense>,
    store: Box<dyn ExpenseStore>,
}

impl ExpenseBook {
    /// Loads the current snapshot from `store`.
    pub fn open(store: Box<dyn ExpenseStore>) -> Result<Self> {
        let expenses = store.load()?;
        Ok(Self { expenses, store })
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn get(&self, id: &ExpenseId) -> Option<&Expense> {
        ExpenseService::find(&self.expenses, id)
    }

    pub fn add(&mut self, draft: ExpenseDraft) -> Result<ExpenseId> {
        let id = ExpenseService::add(&mut self.expenses, draft)?;
        tracing::info!(%id, "expense recorded");
        self.persist();
        Ok(id)
    }

    pub fn update(&mut self, id: &ExpenseId, draft: ExpenseDraft) -> Result<()> {
        ExpenseService::update(&mut self.expenses, id, draft)?;
        tracing::info!(%id, "expense updated");
        self.persist();
        Ok(())
    }

    pub fn remove(&mut self, id: &ExpenseId) -> Result<Expense> {
        let removed = ExpenseService::remove(&mut self.expenses, id)?;
        tracing::info!(%id, "expense removed");
        self.persist();
        Ok(removed)
    }

    /// Comparison report for `selection` as seen on `reference`.
    pub fn report(&self, selection: &PeriodSelection, reference: NaiveDate) -> PeriodReport {
        SummaryService::report(&self.expenses, selection, reference)
    }

    /// Expenses in the selection's current window, latest first.
    pub fn list(&self, selection: &PeriodSelection, reference: NaiveDate) -> Vec<&Expense> {
        let windows = PeriodService::resolve(selection, reference);
        ExpenseService::latest_first(SummaryService::filter_by_window(
            &self.expenses,
            &windows.current,
        ))
    }

    fn persist(&self) {
        if let Err(err) = self.store.save(&self.expenses) {
            tracing::warn!(%err, "failed to persist expenses; changes kept in memory only");
        }
    }
}

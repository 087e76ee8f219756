//! Domain models for recorded expenses.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::parse_iso_date;
use crate::errors::{ExpenseError, Result};

/// Opaque identifier assigned when an expense is first recorded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct ExpenseId(String);

impl ExpenseId {
    /// Generates a fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ExpenseId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ExpenseId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single recorded expense, serialised as `{id, description, amount, date, category}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Expense {
    pub id: ExpenseId,
    pub description: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub category: String,
}

impl Expense {
    /// Builds a record with a freshly generated id.
    pub fn new(
        description: impl Into<String>,
        amount: f64,
        date: NaiveDate,
        category: impl Into<String>,
    ) -> Self {
        Self::with_id(ExpenseId::generate(), description, amount, date, category)
    }

    pub fn with_id(
        id: impl Into<ExpenseId>,
        description: impl Into<String>,
        amount: f64,
        date: NaiveDate,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            amount,
            date,
            category: category.into(),
        }
    }

    /// Materialises a validated draft under the given id.
    pub fn from_draft(id: ExpenseId, draft: ExpenseDraft) -> Self {
        Self {
            id,
            description: draft.description,
            amount: draft.amount,
            date: draft.date,
            category: draft.category,
        }
    }
}

/// Every field of an expense except its id, as entered in the form.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseDraft {
    pub description: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub category: String,
}

impl ExpenseDraft {
    pub fn new(
        description: impl Into<String>,
        amount: f64,
        date: NaiveDate,
        category: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            amount,
            date,
            category: category.into(),
        }
    }

    /// Builds a draft from raw form values, parsing the ISO date.
    pub fn parse(
        description: impl Into<String>,
        amount: f64,
        date: &str,
        category: impl Into<String>,
    ) -> Result<Self> {
        let date = parse_iso_date(date)?;
        let draft = Self::new(description, amount, date, category);
        draft.validate()?;
        Ok(draft)
    }

    /// Applies the entry form's constraints.
    pub fn validate(&self) -> Result<()> {
        if self.description.trim().is_empty() {
            return Err(ExpenseError::Validation(
                "description must not be empty".into(),
            ));
        }
        if !self.amount.is_finite() || self.amount < 0.0 {
            return Err(ExpenseError::Validation(format!(
                "amount must be a non-negative number, got {}",
                self.amount
            )));
        }
        if self.category.trim().is_empty() {
            return Err(ExpenseError::Validation("category must not be empty".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_plain_field_names() {
        let expense = Expense::with_id(
            "abc",
            "Lunch",
            12.5,
            NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            "Food",
        );
        let json = serde_json::to_value(&expense).unwrap();
        assert_eq!(json["id"], "abc");
        assert_eq!(json["date"], "2024-03-05");
        assert_eq!(json["category"], "Food");
        assert_eq!(json["amount"], 12.5);
    }

    #[test]
    fn generated_ids_are_unique() {
        assert_ne!(ExpenseId::generate(), ExpenseId::generate());
    }

    #[test]
    fn draft_validation_rejects_negative_and_blank_values() {
        assert!(ExpenseDraft::parse("Bus", -1.0, "2024-01-01", "Transportation").is_err());
        assert!(ExpenseDraft::parse("  ", 1.0, "2024-01-01", "Transportation").is_err());
        assert!(ExpenseDraft::parse("Bus", 1.0, "2024-01-01", "").is_err());
        assert!(ExpenseDraft::parse("Bus", f64::NAN, "2024-01-01", "Other").is_err());
        assert!(matches!(
            ExpenseDraft::parse("Bus", 1.0, "2024-13-01", "Other"),
            Err(ExpenseError::InvalidDate(_))
        ));
        assert!(ExpenseDraft::parse("Bus", 0.0, "2024-01-01", "Other").is_ok());
    }
}

//! The fixed set of categories offered when recording an expense.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ExpenseError;

/// Colour used for any category outside the known set.
pub const FALLBACK_CATEGORY_COLOR: &str = "#98D8C8";

/// Categories offered by the entry form.
///
/// Stored records keep the category as a plain string, so aggregation never
/// depends on this enum; it exists for input validation and presentation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ExpenseCategory {
    Food,
    Transportation,
    Entertainment,
    Utilities,
    Other,
}

impl ExpenseCategory {
    pub const ALL: [ExpenseCategory; 5] = [
        ExpenseCategory::Food,
        ExpenseCategory::Transportation,
        ExpenseCategory::Entertainment,
        ExpenseCategory::Utilities,
        ExpenseCategory::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ExpenseCategory::Food => "Food",
            ExpenseCategory::Transportation => "Transportation",
            ExpenseCategory::Entertainment => "Entertainment",
            ExpenseCategory::Utilities => "Utilities",
            ExpenseCategory::Other => "Other",
        }
    }

    /// Hex colour used to tint this category in summaries.
    pub fn color_hex(self) -> &'static str {
        match self {
            ExpenseCategory::Food => "#FF6B6B",
            ExpenseCategory::Transportation => "#4ECDC4",
            ExpenseCategory::Entertainment => "#45B7D1",
            ExpenseCategory::Utilities => "#FFA07A",
            ExpenseCategory::Other => FALLBACK_CATEGORY_COLOR,
        }
    }
}

/// Colour for an arbitrary category key, falling back for unknown names.
pub fn category_color(name: &str) -> &'static str {
    name.parse::<ExpenseCategory>()
        .map(ExpenseCategory::color_hex)
        .unwrap_or(FALLBACK_CATEGORY_COLOR)
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExpenseCategory {
    type Err = ExpenseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ExpenseCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| ExpenseError::Validation(format!("unknown category `{s}`")))
    }
}

impl From<ExpenseCategory> for String {
    fn from(category: ExpenseCategory) -> Self {
        category.as_str().to_string()
    }
}

//! Expense model
//!
//! A single dated spending record. Dates are kept as text exactly as the
//! user entered them.

use super::money::Money;

/// Numeric identifier assigned by the expense repository
pub type ExpenseId = u64;

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expense {
    /// Unique id; 0 until the repository assigns one
    pub id: ExpenseId,

    /// Date as entered, expected `YYYY-MM-DD`
    pub date: String,

    /// Amount spent
    pub amount: Money,

    /// Free-text description (may be empty)
    pub description: String,

    /// Category name (may be empty)
    pub category: String,
}

impl Expense {
    /// Create an unsaved expense (id 0)
    pub fn new(
        date: impl Into<String>,
        amount: Money,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: 0,
            date: date.into(),
            amount,
            description: description.into(),
            category: category.into(),
        }
    }

    /// Create an expense with a known id
    pub fn with_id(
        id: ExpenseId,
        date: impl Into<String>,
        amount: Money,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        let mut expense = Self::new(date, amount, description, category);
        expense.id = id;
        expense
    }

    pub fn is_uncategorized(&self) -> bool {
        self.category.is_empty()
    }
}

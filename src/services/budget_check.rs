//! Budget check service
//!
//! Compares a month's spending with the budget set for that month. Runs
//! after every expense mutation and after a budget is set.

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Money, MonthKey};
use crate::storage::Storage;

/// How a month's spending compares to its budget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetStatus {
    /// No budget is set for the month
    NoBudget { total: Money },

    /// Spending is at or under the budget
    Within {
        total: Money,
        budget: Money,
        remaining: Money,
    },

    /// Spending exceeds the budget
    Over {
        total: Money,
        budget: Money,
        overage: Money,
    },
}

impl BudgetStatus {
    /// Classify a month total against an optional budget amount
    ///
    /// Fails only if the difference between the two does not fit.
    pub fn evaluate(total: Money, budget: Option<Money>) -> ExpenseResult<Self> {
        let difference = |a: Money, b: Money| {
            a.checked_sub(b).ok_or_else(|| {
                ExpenseError::Overflow(format!("difference of {} and {}", a, b))
            })
        };

        Ok(match budget {
            None => Self::NoBudget { total },
            Some(budget) if total > budget => Self::Over {
                total,
                budget,
                overage: difference(total, budget)?,
            },
            Some(budget) => Self::Within {
                total,
                budget,
                remaining: difference(budget, total)?,
            },
        })
    }

    pub fn total(&self) -> Money {
        match *self {
            Self::NoBudget { total } | Self::Within { total, .. } | Self::Over { total, .. } => {
                total
            }
        }
    }

    pub fn overage(&self) -> Option<Money> {
        match *self {
            Self::Over { overage, .. } => Some(overage),
            _ => None,
        }
    }
}

/// An over-budget month, reported after a change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetWarning {
    pub month: MonthKey,
    pub total: Money,
    pub budget: Money,
    pub overage: Money,
}

/// Service for comparing spending against monthly budgets
pub struct BudgetCheckService<'a> {
    storage: &'a Storage,
}

impl<'a> BudgetCheckService<'a> {
    /// Create a new budget check service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Compare a month's total spending with its budget
    pub fn check_month(&self, month: MonthKey) -> ExpenseResult<BudgetStatus> {
        let total = self
            .storage
            .expenses
            .total_for_month(month.year, month.month)?;
        let budget = self.storage.budgets.find(month.year, month.month)?;

        BudgetStatus::evaluate(total, budget.map(|b| b.amount))
    }

    /// Check the month an expense date falls in
    ///
    /// Returns `None` when the month is within budget, has no budget, or the
    /// date is too short to name a month.
    pub fn check_date(&self, date: &str) -> ExpenseResult<Option<BudgetWarning>> {
        let Some(month) = MonthKey::from_date_str(date) else {
            return Ok(None);
        };
        self.warning_for(month)
    }

    /// Check several dates, visiting each distinct month once
    pub fn check_dates(&self, dates: &[&str]) -> ExpenseResult<Vec<BudgetWarning>> {
        let mut seen: Vec<MonthKey> = Vec::new();
        let mut warnings = Vec::new();

        for month in dates.iter().filter_map(|d| MonthKey::from_date_str(d)) {
            if seen.contains(&month) {
                continue;
            }
            seen.push(month);

            if let Some(warning) = self.warning_for(month)? {
                warnings.push(warning);
            }
        }

        Ok(warnings)
    }

    fn warning_for(&self, month: MonthKey) -> ExpenseResult<Option<BudgetWarning>> {
        match self.check_month(month)? {
            BudgetStatus::Over {
                total,
                budget,
                overage,
            } => Ok(Some(BudgetWarning {
                month,
                total,
                budget,
                overage,
            })),
            _ => Ok(None),
        }
    }
}

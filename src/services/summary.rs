//! Spending summaries
//!
//! Overall totals by category, and the per-month view that sets spending
//! against the month's budget.

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, Money, MonthKey};
use crate::services::budget_check::{BudgetCheckService, BudgetStatus};
use crate::storage::Storage;

/// Total spending for one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotal {
    pub category: String,
    pub total: Money,
}

/// Totals over every recorded expense
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpendingSummary {
    pub total: Money,
    pub count: usize,
    /// In order of first appearance
    pub by_category: Vec<CategoryTotal>,
}

impl SpendingSummary {
    /// Summarize a list of expenses
    ///
    /// Expenses with an empty category are grouped under `uncategorized`.
    pub fn from_expenses(expenses: &[Expense], uncategorized: &str) -> ExpenseResult<Self> {
        let overflow = |what: &str| ExpenseError::Overflow(format!("total for {}", what));
        let mut by_category: Vec<CategoryTotal> = Vec::new();

        for expense in expenses {
            let name = if expense.is_uncategorized() {
                uncategorized
            } else {
                expense.category.as_str()
            };

            match by_category.iter().position(|c| c.category == name) {
                Some(index) => {
                    let entry = &mut by_category[index];
                    entry.total = entry
                        .total
                        .checked_add(expense.amount)
                        .ok_or_else(|| overflow(name))?;
                }
                None => by_category.push(CategoryTotal {
                    category: name.to_string(),
                    total: expense.amount,
                }),
            }
        }

        let total = Money::checked_sum(expenses.iter().map(|e| e.amount))
            .ok_or_else(|| overflow("all expenses"))?;

        Ok(Self {
            total,
            count: expenses.len(),
            by_category,
        })
    }
}

/// One month's expenses with their budget status
#[derive(Debug, Clone)]
pub struct MonthSummary {
    pub month: MonthKey,
    pub expenses: Vec<Expense>,
    pub status: BudgetStatus,
}

/// Build the summary of all expenses
pub fn spending_summary(storage: &Storage, uncategorized: &str) -> ExpenseResult<SpendingSummary> {
    let expenses = storage.expenses.load_all()?;
    SpendingSummary::from_expenses(&expenses, uncategorized)
}

/// Build the summary for a single month
pub fn month_summary(storage: &Storage, month: MonthKey) -> ExpenseResult<MonthSummary> {
    let expenses = storage
        .expenses
        .find_by_month_year(month.year, month.month)?;
    let status = BudgetCheckService::new(storage).check_month(month)?;

    Ok(MonthSummary {
        month,
        expenses,
        status,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ExpensePaths, Settings};
    use crate::models::Budget;
    use tempfile::TempDir;

    fn expense(cents: i64, category: &str) -> Expense {
        Expense::new("2024-03-01", Money::from_cents(cents), "x", category)
    }

    #[test]
    fn test_summary_groups_in_first_seen_order() {
        let expenses = vec![
            expense(100, "food"),
            expense(200, ""),
            expense(300, "rent"),
            expense(400, "food"),
        ];

        let summary = SpendingSummary::from_expenses(&expenses, "(uncategorized)").unwrap();

        assert_eq!(summary.total, Money::from_cents(1000));
        assert_eq!(summary.count, 4);
        let names: Vec<_> = summary
            .by_category
            .iter()
            .map(|c| c.category.as_str())
            .collect();
        assert_eq!(names, vec!["food", "(uncategorized)", "rent"]);
        assert_eq!(summary.by_category[0].total, Money::from_cents(500));
    }

    #[test]
    fn test_empty_summary() {
        let summary = SpendingSummary::from_expenses(&[], "(none)").unwrap();
        assert_eq!(summary.total, Money::zero());
        assert_eq!(summary.count, 0);
        assert!(summary.by_category.is_empty());
    }

    #[test]
    fn test_summary_overflow_is_an_error() {
        let big = Money::parse("90000000000000000").unwrap();
        let expenses = vec![
            Expense::new("2024-03-01", big, "x", "food"),
            Expense::new("2024-03-02", big, "x", "food"),
        ];

        let err = SpendingSummary::from_expenses(&expenses, "(uncategorized)").unwrap_err();
        assert!(matches!(err, ExpenseError::Overflow(_)));
        assert!(err.to_string().contains("food"));
    }

    #[test]
    fn test_month_summary() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(&paths, &Settings::default());

        storage.expenses.add(expense(7000, "food")).unwrap();
        storage.expenses.add(expense(5000, "food")).unwrap();
        storage
            .expenses
            .add(Expense::new("2024-04-01", Money::from_cents(1), "", ""))
            .unwrap();
        storage
            .budgets
            .upsert(Budget::new(2024, 3, Money::from_cents(15000)))
            .unwrap();

        let summary = month_summary(&storage, MonthKey::new(2024, 3)).unwrap();
        assert_eq!(summary.expenses.len(), 2);
        assert_eq!(
            summary.status,
            BudgetStatus::Within {
                total: Money::from_cents(12000),
                budget: Money::from_cents(15000),
                remaining: Money::from_cents(3000),
            }
        );

        let overall = spending_summary(&storage, "(uncategorized)").unwrap();
        assert_eq!(overall.count, 3);
        assert_eq!(overall.by_category[1].category, "(uncategorized)");
    }
}

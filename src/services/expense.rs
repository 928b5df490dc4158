//! Expense service
//!
//! Add, update and delete flows on top of the expense repository, each
//! followed by a budget check, plus the category/month filter shared by the
//! list and export commands.

use tracing::debug;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, ExpenseId, Money, MonthKey};
use crate::services::budget_check::{BudgetCheckService, BudgetWarning};
use crate::storage::Storage;

/// Fields to change on an existing expense; `None` leaves a field as is
#[derive(Debug, Clone, Default)]
pub struct ExpenseChanges {
    pub description: Option<String>,
    pub amount: Option<Money>,
    pub date: Option<String>,
    pub category: Option<String>,
}

impl ExpenseChanges {
    pub fn is_empty(&self) -> bool {
        self.description.is_none()
            && self.amount.is_none()
            && self.date.is_none()
            && self.category.is_none()
    }

    fn apply_to(self, expense: &mut Expense) {
        if let Some(description) = self.description {
            expense.description = description;
        }
        if let Some(amount) = self.amount {
            expense.amount = amount;
        }
        if let Some(date) = self.date {
            expense.date = date;
        }
        if let Some(category) = self.category {
            expense.category = category;
        }
    }
}

/// Filter used by `list` and `export`
#[derive(Debug, Clone, Default)]
pub struct ExpenseFilter {
    /// Case-insensitive category name
    pub category: Option<String>,

    pub month: Option<MonthKey>,
}

/// Outcome of a mutation: the affected expense and any months now over budget
#[derive(Debug, Clone)]
pub struct ChangeOutcome {
    pub expense: Expense,
    pub warnings: Vec<BudgetWarning>,
}

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    fn budget_check(&self) -> BudgetCheckService<'a> {
        BudgetCheckService::new(self.storage)
    }

    /// Record a new expense and check its month's budget
    pub fn add(&self, mut expense: Expense) -> ExpenseResult<ChangeOutcome> {
        expense.id = self.storage.expenses.add(expense.clone())?;
        debug!(id = expense.id, date = %expense.date, "expense added");

        let warnings = self.budget_check().check_dates(&[expense.date.as_str()])?;
        Ok(ChangeOutcome { expense, warnings })
    }

    /// Apply changes to an existing expense
    ///
    /// Budgets are checked for both the old and the new date, so moving an
    /// expense into another month reports on both months.
    pub fn update(&self, id: ExpenseId, changes: ExpenseChanges) -> ExpenseResult<ChangeOutcome> {
        let mut expense = self
            .storage
            .expenses
            .find_by_id(id)?
            .ok_or_else(|| ExpenseError::expense_not_found(id.to_string()))?;

        let old_date = expense.date.clone();
        changes.apply_to(&mut expense);

        if !self.storage.expenses.update(expense.clone())? {
            return Err(ExpenseError::expense_not_found(id.to_string()));
        }
        debug!(id, "expense updated");

        let warnings = self
            .budget_check()
            .check_dates(&[old_date.as_str(), expense.date.as_str()])?;
        Ok(ChangeOutcome { expense, warnings })
    }

    /// Delete an expense and re-check its month's budget
    pub fn delete(&self, id: ExpenseId) -> ExpenseResult<ChangeOutcome> {
        let expense = self
            .storage
            .expenses
            .find_by_id(id)?
            .ok_or_else(|| ExpenseError::expense_not_found(id.to_string()))?;

        if !self.storage.expenses.delete(id)? {
            return Err(ExpenseError::expense_not_found(id.to_string()));
        }
        debug!(id, "expense deleted");

        let warnings = self.budget_check().check_dates(&[expense.date.as_str()])?;
        Ok(ChangeOutcome { expense, warnings })
    }

    /// Expenses matching a filter, in file order
    ///
    /// With a category, the category match comes first and the month (if
    /// any) is then compared numerically against each date. With only a
    /// month, the textual month-prefix match is used.
    pub fn list(&self, filter: &ExpenseFilter) -> ExpenseResult<Vec<Expense>> {
        let repo = &self.storage.expenses;

        match (&filter.category, filter.month) {
            (Some(category), month) => {
                let mut expenses = repo.find_by_category(category)?;
                if let Some(month) = month {
                    expenses.retain(|e| month.matches_parsed(&e.date));
                }
                Ok(expenses)
            }
            (None, Some(month)) => repo.find_by_month_year(month.year, month.month),
            (None, None) => repo.load_all(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ExpensePaths, Settings};
    use crate::models::Budget;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(&paths, &Settings::default());
        (temp_dir, storage)
    }

    fn expense(date: &str, cents: i64, category: &str) -> Expense {
        Expense::new(date, Money::from_cents(cents), "item", category)
    }

    #[test]
    fn test_add_returns_id_and_warning() {
        let (_temp_dir, storage) = create_test_storage();
        storage
            .budgets
            .upsert(Budget::new(2024, 3, Money::from_cents(1000)))
            .unwrap();
        let service = ExpenseService::new(&storage);

        let first = service.add(expense("2024-03-05", 800, "food")).unwrap();
        assert_eq!(first.expense.id, 1);
        assert!(first.warnings.is_empty());

        let second = service.add(expense("2024-03-06", 500, "food")).unwrap();
        assert_eq!(second.expense.id, 2);
        assert_eq!(second.warnings.len(), 1);
        assert_eq!(second.warnings[0].overage, Money::from_cents(300));
    }

    #[test]
    fn test_update_changes_only_given_fields() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);
        service.add(expense("2024-03-05", 800, "food")).unwrap();

        let changes = ExpenseChanges {
            amount: Some(Money::from_cents(900)),
            category: Some("dining".into()),
            ..ExpenseChanges::default()
        };
        let outcome = service.update(1, changes).unwrap();

        assert_eq!(outcome.expense.amount, Money::from_cents(900));
        assert_eq!(outcome.expense.category, "dining");
        assert_eq!(outcome.expense.description, "item");
        assert_eq!(outcome.expense.date, "2024-03-05");
        assert_eq!(storage.expenses.find_by_id(1).unwrap().unwrap(), outcome.expense);
    }

    #[test]
    fn test_update_checks_old_and_new_month() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);
        service.add(expense("2024-03-05", 800, "")).unwrap();
        service.add(expense("2024-04-05", 800, "")).unwrap();
        storage
            .budgets
            .upsert(Budget::new(2024, 3, Money::from_cents(500)))
            .unwrap();
        storage
            .budgets
            .upsert(Budget::new(2024, 4, Money::from_cents(1000)))
            .unwrap();

        // Moving #2 into March leaves April empty and pushes March further over
        let changes = ExpenseChanges {
            date: Some("2024-03-20".into()),
            ..ExpenseChanges::default()
        };
        let outcome = service.update(2, changes).unwrap();

        assert_eq!(outcome.warnings.len(), 1);
        assert_eq!(outcome.warnings[0].month, MonthKey::new(2024, 3));
        assert_eq!(outcome.warnings[0].overage, Money::from_cents(1100));
    }

    #[test]
    fn test_update_missing_is_not_found() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        let err = service.update(3, ExpenseChanges::default()).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_delete() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);
        service.add(expense("2024-03-05", 800, "food")).unwrap();

        let outcome = service.delete(1).unwrap();
        assert_eq!(outcome.expense.category, "food");
        assert!(storage.expenses.load_all().unwrap().is_empty());

        assert!(service.delete(1).unwrap_err().is_not_found());
    }

    #[test]
    fn test_list_filters() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);
        service.add(expense("2024-03-05", 100, "Food")).unwrap();
        service.add(expense("2024-04-05", 200, "food")).unwrap();
        service.add(expense("2024-03-09", 300, "bus")).unwrap();

        let all = service.list(&ExpenseFilter::default()).unwrap();
        assert_eq!(all.len(), 3);

        let food = service
            .list(&ExpenseFilter {
                category: Some("food".into()),
                month: None,
            })
            .unwrap();
        assert_eq!(food.len(), 2);

        let march = service
            .list(&ExpenseFilter {
                category: None,
                month: Some(MonthKey::new(2024, 3)),
            })
            .unwrap();
        assert_eq!(march.iter().map(|e| e.id).collect::<Vec<_>>(), vec![1, 3]);

        let food_march = service
            .list(&ExpenseFilter {
                category: Some("FOOD".into()),
                month: Some(MonthKey::new(2024, 3)),
            })
            .unwrap();
        assert_eq!(food_march.len(), 1);
        assert_eq!(food_march[0].id, 1);
    }

    #[test]
    fn test_changes_is_empty() {
        assert!(ExpenseChanges::default().is_empty());
        let changes = ExpenseChanges {
            date: Some("2024-01-01".into()),
            ..ExpenseChanges::default()
        };
        assert!(!changes.is_empty());
    }
}

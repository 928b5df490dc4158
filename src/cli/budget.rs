//! Budget CLI commands
//!
//! Implements `set-budget` and `month-summary`.

use tracing::debug;

use crate::display::{format_budget_set, format_expense_table, format_month_status};
use crate::error::ExpenseResult;
use crate::models::{Budget, Money, MonthKey};
use crate::services::{month_summary, BudgetCheckService};
use crate::storage::Storage;

/// Handle `set-budget`
///
/// Without a year, the budget is set for the current year.
pub fn handle_set_budget(
    storage: &Storage,
    month: u32,
    amount: Money,
    year: Option<i32>,
) -> ExpenseResult<()> {
    let year = year.unwrap_or_else(|| MonthKey::current().year);
    let key = MonthKey::new(year, month);

    storage.budgets.upsert(Budget::new(year, month, amount))?;
    debug!(%key, %amount, "budget set");

    let status = BudgetCheckService::new(storage).check_month(key)?;
    print!("{}", format_budget_set(key, amount, &status));
    Ok(())
}

/// Handle `month-summary`
pub fn handle_month_summary(storage: &Storage, month: u32) -> ExpenseResult<()> {
    let key = MonthKey::new(MonthKey::current().year, month);
    let summary = month_summary(storage, key)?;

    print!("{}", format_expense_table(&summary.expenses));
    print!("{}", format_month_status(&summary.status));
    Ok(())
}

//! Expense CLI commands
//!
//! Implements add, update, delete and list. Every change is followed by the
//! budget warnings for the months it touched.

use crate::display::{format_expense_table, format_warning};
use crate::error::ExpenseResult;
use crate::models::{Expense, ExpenseId, Money, MonthKey};
use crate::services::{BudgetWarning, ExpenseChanges, ExpenseFilter, ExpenseService};
use crate::storage::Storage;

fn print_warnings(warnings: &[BudgetWarning]) {
    for warning in warnings {
        println!("{}", format_warning(warning));
    }
}

/// Build the filter shared by `list` and `export`
///
/// Month numbers always refer to the current year.
pub fn current_year_filter(category: Option<String>, month: Option<u32>) -> ExpenseFilter {
    let year = MonthKey::current().year;
    ExpenseFilter {
        category,
        month: month.map(|m| MonthKey::new(year, m)),
    }
}

/// Handle `add`
pub fn handle_add(
    storage: &Storage,
    description: String,
    amount: Money,
    date: Option<String>,
    category: Option<String>,
) -> ExpenseResult<()> {
    let date = date.unwrap_or_else(MonthKey::today_string);
    let expense = Expense::new(date, amount, description, category.unwrap_or_default());

    let outcome = ExpenseService::new(storage).add(expense)?;
    println!("Added expense id={}", outcome.expense.id);
    print_warnings(&outcome.warnings);

    Ok(())
}

/// Handle `update`
pub fn handle_update(
    storage: &Storage,
    id: ExpenseId,
    description: Option<String>,
    amount: Option<Money>,
    date: Option<String>,
    category: Option<String>,
) -> ExpenseResult<()> {
    let changes = ExpenseChanges {
        description,
        amount,
        date,
        category,
    };

    if changes.is_empty() {
        println!("Nothing to update for expense id={}", id);
        return Ok(());
    }

    match ExpenseService::new(storage).update(id, changes) {
        Ok(outcome) => {
            println!("Updated expense id={}", id);
            print_warnings(&outcome.warnings);
            Ok(())
        }
        Err(e) if e.is_not_found() => {
            println!("{}", e);
            Ok(())
        }
        Err(e) => Err(e),
    }
}

/// Handle `delete`
pub fn handle_delete(storage: &Storage, id: ExpenseId) -> ExpenseResult<()> {
    match ExpenseService::new(storage).delete(id) {
        Ok(outcome) => {
            println!("Deleted expense id={}", id);
            print_warnings(&outcome.warnings);
            Ok(())
        }
        Err(e) if e.is_not_found() => {
            println!("{}", e);
            Ok(())
        }
        Err(e) => Err(e),
    }
}

/// Handle `list`
pub fn handle_list(
    storage: &Storage,
    category: Option<String>,
    month: Option<u32>,
) -> ExpenseResult<()> {
    let filter = current_year_filter(category, month);
    let expenses = ExpenseService::new(storage).list(&filter)?;

    print!("{}", format_expense_table(&expenses));
    Ok(())
}

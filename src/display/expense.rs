//! Expense display formatting
//!
//! Formats expenses and spending summaries for terminal output.

use crate::models::Expense;
use crate::services::SpendingSummary;

/// Format a list of expenses as a table
pub fn format_expense_table(expenses: &[Expense]) -> String {
    if expenses.is_empty() {
        return "No expenses.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<6} {:<10} {:<10} {:<12} {}\n",
        "ID", "Date", "Amount", "Category", "Description"
    ));

    for expense in expenses {
        output.push_str(&format!(
            "{:<6} {:<10} {:<10} {:<12} {}\n",
            expense.id, expense.date, expense.amount, expense.category, expense.description
        ));
    }

    output
}

/// Format the overall spending summary
pub fn format_summary(summary: &SpendingSummary) -> String {
    let mut output = String::new();
    output.push_str(&format!("Total: {}\n", summary.total));
    output.push_str(&format!("Count: {}\n", summary.count));
    output.push_str("By category:\n");

    for entry in &summary.by_category {
        output.push_str(&format!("  {:<12} {}\n", entry.category, entry.total));
    }

    output
}

//! Budget display formatting
//!
//! Warnings are printed on stdout with a `WARNING: ` prefix.

use crate::models::{Money, MonthKey};
use crate::services::{BudgetStatus, BudgetWarning};

/// Format an over-budget warning raised after a change to expenses
pub fn format_warning(warning: &BudgetWarning) -> String {
    format!(
        "WARNING: For {} you have spent {} which exceeds budget {} by {}",
        warning.month, warning.total, warning.budget, warning.overage
    )
}

/// Confirmation printed by `set-budget`, with a warning if already over
pub fn format_budget_set(month: MonthKey, amount: Money, status: &BudgetStatus) -> String {
    let mut output = format!("Budget set for {} : {}\n", month, amount);
    if let Some(overage) = status.overage() {
        output.push_str(&format!(
            "WARNING: You have already exceeded this budget by {}\n",
            overage
        ));
    }
    output
}

/// Budget lines of the month summary
pub fn format_month_status(status: &BudgetStatus) -> String {
    let mut output = format!("Month total: {}\n", status.total());

    match status {
        BudgetStatus::NoBudget { .. } => {
            output.push_str("No budget set for this month.\n");
        }
        BudgetStatus::Within {
            budget, remaining, ..
        } => {
            output.push_str(&format!("Budget: {}\n", budget));
            output.push_str(&format!("Remaining: {}\n", remaining));
        }
        BudgetStatus::Over {
            budget, overage, ..
        } => {
            output.push_str(&format!("Budget: {}\n", budget));
            output.push_str(&format!(
                "WARNING: You have exceeded the budget by {}\n",
                overage
            ));
        }
    }

    output
}

//! Display formatting for terminal output
//!
//! Provides plain-text formatting for expense tables, summaries and budget
//! messages.

pub mod budget;
pub mod expense;

pub use budget::{format_budget_set, format_month_status, format_warning};
pub use expense::{format_expense_table, format_summary};

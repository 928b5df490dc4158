//! Service layer for expense-cli
//!
//! The service layer provides business logic on top of the storage layer:
//! budget checks after changes, list filters and summaries.

pub mod budget_check;
pub mod expense;
pub mod summary;

pub use budget_check::{BudgetCheckService, BudgetStatus, BudgetWarning};
pub use expense::{ChangeOutcome, ExpenseChanges, ExpenseFilter, ExpenseService};
pub use summary::{month_summary, spending_summary, CategoryTotal, MonthSummary, SpendingSummary};

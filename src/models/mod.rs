//! Core data models for expense-cli
//!
//! This module contains the data structures of the expense domain:
//! expenses, monthly budgets, money amounts and month keys.

pub mod budget;
pub mod expense;
pub mod money;
pub mod month;

pub use budget::Budget;
pub use expense::{Expense, ExpenseId};
pub use money::{Money, MoneyParseError};
pub use month::MonthKey;

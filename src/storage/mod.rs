//! Storage layer for expense-cli
//!
//! Flat text files, one record per line, rewritten in full on every
//! mutation. There is no locking: two processes writing at once will lose
//! one of the writes.

pub mod budgets;
pub mod codec;
pub mod expenses;
pub mod file_io;

pub use budgets::BudgetRepository;
pub use codec::{DecodeError, Record, DELIMITER};
pub use expenses::ExpenseRepository;
pub use file_io::{read_records, write_records};

use crate::config::{ExpensePaths, Settings};

/// Main storage coordinator that provides access to both repositories
pub struct Storage {
    pub expenses: ExpenseRepository,
    pub budgets: BudgetRepository,
}

impl Storage {
    /// Create a new Storage instance from resolved paths and settings
    pub fn new(paths: &ExpensePaths, settings: &Settings) -> Self {
        Self {
            expenses: ExpenseRepository::new(paths.data_file(&settings.expenses_file))
                .with_atomic_writes(settings.atomic_writes),
            budgets: BudgetRepository::new(paths.data_file(&settings.budgets_file))
                .with_atomic_writes(settings.atomic_writes),
        }
    }
}

//! Budget repository backed by a flat file
//!
//! Holds at most one budget per (year, month). There is no delete.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Budget, MonthKey};

use super::file_io::{read_records, write_records};

/// Repository for monthly budget persistence
pub struct BudgetRepository {
    path: PathBuf,
    atomic_writes: bool,
}

impl BudgetRepository {
    /// Create a new budget repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            atomic_writes: false,
        }
    }

    /// Rewrite the file via temp-file-and-rename instead of in place
    pub fn with_atomic_writes(mut self, atomic: bool) -> Self {
        self.atomic_writes = atomic;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every budget in file order
    ///
    /// An unreadable file is logged and treated as empty.
    pub fn load_all(&self) -> ExpenseResult<Vec<Budget>> {
        match read_records(&self.path) {
            Ok(budgets) => Ok(budgets),
            Err(ExpenseError::Io(msg)) => {
                warn!(path = %self.path.display(), "Error reading budgets: {}", msg);
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }

    /// Find the budget for a month
    pub fn find(&self, year: i32, month: u32) -> ExpenseResult<Option<Budget>> {
        let key = MonthKey::new(year, month);
        Ok(self.load_all()?.into_iter().find(|b| b.is_for(key)))
    }

    /// Insert a budget, or replace the existing one for the same month
    ///
    /// The file is only rewritten after a complete, successful read.
    pub fn upsert(&self, budget: Budget) -> ExpenseResult<()> {
        let mut budgets: Vec<Budget> = read_records(&self.path)?;

        let key = budget.key();
        match budgets.iter().position(|b| b.is_for(key)) {
            Some(index) => {
                debug!(%key, "replacing budget");
                budgets[index] = budget;
            }
            None => {
                debug!(%key, "adding budget");
                budgets.push(budget);
            }
        }

        write_records(&self.path, &budgets, self.atomic_writes)
    }
}

//! Path management for expense-cli
//!
//! ## Path Resolution Order
//!
//! 1. `--data-dir` command-line flag (if given)
//! 2. `EXPENSE_CLI_DATA_DIR` environment variable (if set)
//! 3. The current working directory

use std::path::{Path, PathBuf};

use crate::error::ExpenseError;

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "EXPENSE_CLI_DATA_DIR";

/// Manages all paths used by expense-cli
#[derive(Debug, Clone)]
pub struct ExpensePaths {
    /// Directory holding the data files and settings
    base_dir: PathBuf,
}

impl ExpensePaths {
    /// Create a new ExpensePaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no explicit directory is given and the current
    /// working directory cannot be determined.
    pub fn new(explicit: Option<PathBuf>) -> Result<Self, ExpenseError> {
        let base_dir = if let Some(dir) = explicit {
            dir
        } else if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            std::env::current_dir().map_err(|e| {
                ExpenseError::Config(format!("Could not determine working directory: {}", e))
            })?
        };

        Ok(Self { base_dir })
    }

    /// Create ExpensePaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("expense-cli.json")
    }

    /// Resolve a data file name against the base directory
    ///
    /// Absolute names are returned unchanged.
    pub fn data_file(&self, name: &str) -> PathBuf {
        self.base_dir.join(name)
    }
}

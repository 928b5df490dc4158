//! User settings for expense-cli
//!
//! Settings live in an optional `expense-cli.json` next to the data files.
//! Every field has a default, so a missing or partial file is fine.

use serde::{Deserialize, Serialize};

use super::paths::ExpensePaths;
use crate::error::ExpenseError;

/// User settings for expense-cli
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// File name (or absolute path) of the expense file
    #[serde(default = "default_expenses_file")]
    pub expenses_file: String,

    /// File name (or absolute path) of the budget file
    #[serde(default = "default_budgets_file")]
    pub budgets_file: String,

    /// Write to a temp file and rename instead of overwriting in place
    #[serde(default)]
    pub atomic_writes: bool,

    /// Label used in summaries for expenses without a category
    #[serde(default = "default_uncategorized_label")]
    pub uncategorized_label: String,
}

fn default_expenses_file() -> String {
    "expenses.txt".to_string()
}

fn default_budgets_file() -> String {
    "budgets.txt".to_string()
}

fn default_uncategorized_label() -> String {
    "(uncategorized)".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            expenses_file: default_expenses_file(),
            budgets_file: default_budgets_file(),
            atomic_writes: false,
            uncategorized_label: default_uncategorized_label(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &ExpensePaths) -> Result<Self, ExpenseError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                ExpenseError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                ExpenseError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }
}

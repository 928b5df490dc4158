//! CLI command handlers
//!
//! This module contains the command definitions and their implementation,
//! bridging the clap argument parsing with the service layer.

pub mod budget;
pub mod expense;
pub mod export;
pub mod report;

use clap::Subcommand;
use std::path::PathBuf;

use crate::config::Settings;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{ExpenseId, Money};
use crate::storage::Storage;

pub use budget::{handle_month_summary, handle_set_budget};
pub use expense::{handle_add, handle_delete, handle_list, handle_update};
pub use export::handle_export;
pub use report::handle_summary;

/// Parse an amount given on the command line
pub fn parse_amount(value: &str) -> ExpenseResult<Money> {
    Money::parse(value).map_err(|e| ExpenseError::Parse(e.to_string()))
}

fn amount_arg(value: &str) -> Result<Money, String> {
    parse_amount(value).map_err(|e| e.to_string())
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Record a new expense
    Add {
        /// What the money was spent on
        #[arg(short, long)]
        description: String,
        /// Amount (e.g., "12.50")
        #[arg(short, long, value_parser = amount_arg, allow_hyphen_values = true)]
        amount: Money,
        /// Expense date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,
        /// Category name
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Change fields of an existing expense
    Update {
        /// Expense ID
        id: ExpenseId,
        /// New description
        #[arg(short, long)]
        description: Option<String>,
        /// New amount
        #[arg(short, long, value_parser = amount_arg, allow_hyphen_values = true)]
        amount: Option<Money>,
        /// New date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
        /// New category
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Delete an expense
    Delete {
        /// Expense ID
        id: ExpenseId,
    },

    /// List expenses, optionally filtered
    List {
        /// Only expenses in this category (case-insensitive)
        #[arg(short, long)]
        category: Option<String>,
        /// Only expenses in this month (1-12) of the current year
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,
    },

    /// Show totals overall and by category
    Summary,

    /// Show a month's expenses against its budget
    MonthSummary {
        /// Month number (1-12) of the current year
        #[arg(value_parser = clap::value_parser!(u32).range(1..=12))]
        month: u32,
    },

    /// Set the budget for a month
    SetBudget {
        /// Month number (1-12)
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: u32,
        /// Budget amount
        #[arg(short, long, value_parser = amount_arg)]
        amount: Money,
        /// Year, defaults to the current year
        #[arg(short, long)]
        year: Option<i32>,
    },

    /// Export expenses to a CSV file
    Export {
        /// Output file path (overwritten)
        #[arg(short, long)]
        file: PathBuf,
        /// Only expenses in this month (1-12) of the current year
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,
        /// Only expenses in this category (case-insensitive)
        #[arg(short, long)]
        category: Option<String>,
    },
}

/// Run a single command against the given storage
pub fn run_command(storage: &Storage, settings: &Settings, cmd: Commands) -> ExpenseResult<()> {
    match cmd {
        Commands::Add {
            description,
            amount,
            date,
            category,
        } => handle_add(storage, description, amount, date, category),
        Commands::Update {
            id,
            description,
            amount,
            date,
            category,
        } => handle_update(storage, id, description, amount, date, category),
        Commands::Delete { id } => handle_delete(storage, id),
        Commands::List { category, month } => handle_list(storage, category, month),
        Commands::Summary => handle_summary(storage, settings),
        Commands::MonthSummary { month } => handle_month_summary(storage, month),
        Commands::SetBudget {
            month,
            amount,
            year,
        } => handle_set_budget(storage, month, amount, year),
        Commands::Export {
            file,
            month,
            category,
        } => handle_export(storage, file, month, category),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("12.50").unwrap(), Money::from_cents(1250));

        let err = parse_amount("twelve").unwrap_err();
        assert!(matches!(err, ExpenseError::Parse(_)));
        assert_eq!(err.to_string(), "Parse error: Invalid amount: 'twelve'");
    }
}

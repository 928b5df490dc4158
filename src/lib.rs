//! expense-cli - Command-line personal expense tracker
//!
//! This library provides the core functionality for the `expense` binary:
//! dated expenses kept in a flat pipe-delimited file, monthly budgets kept in
//! a second file, and the budget check that ties the two together.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Data directory resolution and settings
//! - `error`: Custom error types
//! - `models`: Expenses, budgets, money and month keys
//! - `storage`: Line codec and whole-file repositories
//! - `services`: Budget checks, filters and summaries
//! - `export`: CSV export
//! - `display`: Terminal formatting
//! - `cli`: Command definitions and handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_cli::config::{ExpensePaths, Settings};
//! use expense_cli::storage::Storage;
//!
//! let paths = ExpensePaths::new(None)?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::new(&paths, &settings);
//! let total = storage.expenses.total_for_month(2024, 3)?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};

//! Export module for expense-cli
//!
//! Provides CSV export of (optionally filtered) expenses.

pub mod csv;

pub use self::csv::{export_expenses_csv, export_expenses_to_file, CSV_HEADER};

//! CSV Export functionality
//!
//! Writes expenses to CSV with the header `id,date,amount,category,description`.
//! Amounts always carry two decimals; fields holding a comma, quote or line
//! break are quoted with inner quotes doubled.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::{QuoteStyle, Terminator, WriterBuilder};
use tracing::debug;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;

/// Column header of the export
pub const CSV_HEADER: [&str; 5] = ["id", "date", "amount", "category", "description"];

/// Export expenses to CSV, returning the number of rows written
pub fn export_expenses_csv<W: Write>(expenses: &[Expense], writer: W) -> ExpenseResult<usize> {
    let mut csv_writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);

    csv_writer.write_record(CSV_HEADER)?;

    for expense in expenses {
        csv_writer.write_record([
            expense.id.to_string(),
            expense.date.clone(),
            expense.amount.to_string(),
            expense.category.clone(),
            expense.description.clone(),
        ])?;
    }

    csv_writer
        .flush()
        .map_err(|e| ExpenseError::Export(e.to_string()))?;

    Ok(expenses.len())
}

/// Export expenses to a file, replacing any existing contents
pub fn export_expenses_to_file<P: AsRef<Path>>(
    expenses: &[Expense],
    path: P,
) -> ExpenseResult<usize> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| {
        ExpenseError::Export(format!("Failed to create {}: {}", path.display(), e))
    })?;

    let count = export_expenses_csv(expenses, file)?;
    debug!(path = %path.display(), count, "exported expenses");
    Ok(count)
}

//! CLI command for CSV export

use std::path::PathBuf;

use crate::error::ExpenseResult;
use crate::export::export_expenses_to_file;
use crate::services::ExpenseService;
use crate::storage::Storage;

use super::expense::current_year_filter;

/// Handle `export`
pub fn handle_export(
    storage: &Storage,
    file: PathBuf,
    month: Option<u32>,
    category: Option<String>,
) -> ExpenseResult<()> {
    let filter = current_year_filter(category, month);
    let expenses = ExpenseService::new(storage).list(&filter)?;

    let count = export_expenses_to_file(&expenses, &file)?;
    println!("Exported {} expenses to {}", count, file.display());
    Ok(())
}

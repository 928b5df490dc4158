//! Report CLI commands

use crate::config::Settings;
use crate::display::format_summary;
use crate::error::ExpenseResult;
use crate::services::spending_summary;
use crate::storage::Storage;

/// Handle `summary`
pub fn handle_summary(storage: &Storage, settings: &Settings) -> ExpenseResult<()> {
    let summary = spending_summary(storage, &settings.uncategorized_label)?;
    print!("{}", format_summary(&summary));
    Ok(())
}

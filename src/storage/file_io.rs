//! File I/O for line-per-record data files
//!
//! Every write replaces the whole file. By default the file is truncated and
//! rewritten in place; with `atomic` set, the records go to a temp file that
//! is then renamed over the original.

use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::ExpenseError;

use super::codec::Record;

/// Read every record from a file, returning an empty list if it doesn't exist
///
/// Lines are trimmed and blank lines are skipped. A line that fails to decode
/// aborts the whole read with [`ExpenseError::Format`]. An I/O error at any
/// point (including a line that is not valid UTF-8) aborts it with
/// [`ExpenseError::Io`]; a partial list is never returned.
pub fn read_records<T, P>(path: P) -> Result<Vec<T>, ExpenseError>
where
    T: Record,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        debug!(path = %path.display(), "data file missing, treating as empty");
        return Ok(Vec::new());
    }

    let file = File::open(path).map_err(|e| {
        ExpenseError::Io(format!("Failed to open {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);
    let mut records = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| {
            ExpenseError::Io(format!(
                "Failed to read {} at line {}: {}",
                path.display(),
                index + 1,
                e
            ))
        })?;

        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let record = T::decode(line)
            .map_err(|e| ExpenseError::format(path, index + 1, e.to_string()))?;
        records.push(record);
    }

    debug!(path = %path.display(), count = records.len(), "loaded {} records", T::NAME);
    Ok(records)
}

/// Replace the contents of a file with the given records, one per line
pub fn write_records<T, P>(path: P, records: &[T], atomic: bool) -> Result<(), ExpenseError>
where
    T: Record,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            ExpenseError::Io(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    if atomic {
        write_atomic(path, records)?;
    } else {
        let file = File::create(path).map_err(|e| {
            ExpenseError::Io(format!("Failed to open {} for writing: {}", path.display(), e))
        })?;
        write_lines(BufWriter::new(file), records)?;
    }

    debug!(path = %path.display(), count = records.len(), atomic, "rewrote {} file", T::NAME);
    Ok(())
}

/// Temp file path next to the target (same directory, so rename is atomic)
fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

fn write_atomic<T: Record>(path: &Path, records: &[T]) -> Result<(), ExpenseError> {
    let temp = temp_path(path);

    let file = File::create(&temp)
        .map_err(|e| ExpenseError::Io(format!("Failed to create temp file: {}", e)))?;

    let file = write_lines(BufWriter::new(file), records)?;

    file.sync_all()
        .map_err(|e| ExpenseError::Io(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp, path).map_err(|e| {
        let _ = fs::remove_file(&temp);
        ExpenseError::Io(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

fn write_lines<T: Record>(mut writer: BufWriter<File>, records: &[T]) -> Result<File, ExpenseError> {
    for record in records {
        writeln!(writer, "{}", record.encode())
            .map_err(|e| ExpenseError::Io(format!("Failed to write {}: {}", T::NAME, e)))?;
    }

    writer
        .into_inner()
        .map_err(|e| ExpenseError::Io(format!("Failed to flush data: {}", e.error())))
}

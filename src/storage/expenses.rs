//! Expense repository backed by a flat file
//!
//! Nothing is cached between calls: every operation reloads the whole file,
//! and every mutation rewrites it.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, ExpenseId, Money, MonthKey};

use super::file_io::{read_records, write_records};

/// Repository for expense persistence
pub struct ExpenseRepository {
    path: PathBuf,
    atomic_writes: bool,
}

impl ExpenseRepository {
    /// Create a new expense repository
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

    /// Load every expense in file order
    ///
    /// An unreadable file is logged and treated as empty. A malformed line
    /// is an error.
    pub fn load_all(&self) -> ExpenseResult<Vec<Expense>> {
        match read_records(&self.path) {
            Ok(expenses) => Ok(expenses),
            Err(ExpenseError::Io(msg)) => {
                warn!(path = %self.path.display(), "Error reading expenses: {}", msg);
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }

    /// Load for a read-modify-write cycle
    ///
    /// Unlike [`load_all`](Self::load_all), an unreadable file is an error
    /// here, so a failed read can never be followed by a rewrite that drops
    /// the existing records.
    fn load_for_write(&self) -> ExpenseResult<Vec<Expense>> {
        read_records(&self.path)
    }

    fn write_all(&self, expenses: &[Expense]) -> ExpenseResult<()> {
        write_records(&self.path, expenses, self.atomic_writes)
    }

    /// Find an expense by id
    pub fn find_by_id(&self, id: ExpenseId) -> ExpenseResult<Option<Expense>> {
        Ok(self.load_all()?.into_iter().find(|e| e.id == id))
    }

    /// Append an expense and return the id assigned to it
    ///
    /// The id is `1 + max(existing ids)`, or 1 for an empty file. Whatever
    /// id the caller put on `expense` is overwritten.
    pub fn add(&self, mut expense: Expense) -> ExpenseResult<ExpenseId> {
        let mut expenses = self.load_for_write()?;

        let next_id = expenses.iter().map(|e| e.id).max().unwrap_or(0) + 1;
        expense.id = next_id;
        expenses.push(expense);

        self.write_all(&expenses)?;
        debug!(id = next_id, "added expense");
        Ok(next_id)
    }

    /// Replace the expense with the same id
    ///
    /// Returns `false` (and leaves the file untouched) if no such id exists.
    pub fn update(&self, expense: Expense) -> ExpenseResult<bool> {
        let mut expenses = self.load_for_write()?;

        let Some(slot) = expenses.iter_mut().find(|e| e.id == expense.id) else {
            return Ok(false);
        };
        *slot = expense;

        self.write_all(&expenses)?;
        Ok(true)
    }

    /// Remove the expense with the given id
    ///
    /// Returns `false` (and leaves the file untouched) if no such id exists.
    pub fn delete(&self, id: ExpenseId) -> ExpenseResult<bool> {
        let mut expenses = self.load_for_write()?;

        let Some(index) = expenses.iter().position(|e| e.id == id) else {
            return Ok(false);
        };
        expenses.remove(index);

        self.write_all(&expenses)?;
        Ok(true)
    }

    /// Expenses whose date text starts with the given year and month
    pub fn find_by_month_year(&self, year: i32, month: u32) -> ExpenseResult<Vec<Expense>> {
        let key = MonthKey::new(year, month);
        Ok(self
            .load_all()?
            .into_iter()
            .filter(|e| key.matches_prefix(&e.date))
            .collect())
    }

    /// Expenses whose category equals `category`, ignoring case
    pub fn find_by_category(&self, category: &str) -> ExpenseResult<Vec<Expense>> {
        let wanted = category.to_lowercase();
        Ok(self
            .load_all()?
            .into_iter()
            .filter(|e| e.category.to_lowercase() == wanted)
            .collect())
    }

    /// Sum of amounts spent in the given month
    pub fn total_for_month(&self, year: i32, month: u32) -> ExpenseResult<Money> {
        let expenses = self.find_by_month_year(year, month)?;
        Money::checked_sum(expenses.iter().map(|e| e.amount)).ok_or_else(|| {
            ExpenseError::Overflow(format!("total for {}", MonthKey::new(year, month)))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, ExpenseRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.txt");
        let repo = ExpenseRepository::new(path);
        (temp_dir, repo)
    }

    fn expense(date: &str, cents: i64, category: &str) -> Expense {
        Expense::new(date, Money::from_cents(cents), "item", category)
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        assert!(repo.load_all().unwrap().is_empty());
        assert_eq!(repo.find_by_id(1).unwrap(), None);
    }

    #[test]
    fn test_add_assigns_first_id_and_finds_it() {
        let (_temp_dir, repo) = create_test_repo();

        let id = repo
            .add(Expense::new("2024-03-05", Money::from_cents(5000), "lunch", "food"))
            .unwrap();
        assert_eq!(id, 1);

        let found = repo.find_by_id(1).unwrap().unwrap();
        assert_eq!(found.category, "food");
        assert_eq!(found.description, "lunch");
        assert_eq!(found.amount, Money::from_cents(5000));
    }

    #[test]
    fn test_add_ignores_caller_id() {
        let (_temp_dir, repo) = create_test_repo();
        let mut e = expense("2024-03-05", 100, "");
        e.id = 42;

        assert_eq!(repo.add(e).unwrap(), 1);
        assert_eq!(repo.add(expense("2024-03-06", 100, "")).unwrap(), 2);
    }

    #[test]
    fn test_add_uses_max_plus_one() {
        let (_temp_dir, repo) = create_test_repo();
        for _ in 0..3 {
            repo.add(expense("2024-03-05", 100, "")).unwrap();
        }
        repo.delete(2).unwrap();

        assert_eq!(repo.add(expense("2024-03-05", 100, "")).unwrap(), 4);
    }

    #[test]
    fn test_delete_only_record_then_reuse_id() {
        let (_temp_dir, repo) = create_test_repo();
        repo.add(expense("2024-03-05", 100, "")).unwrap();

        assert!(repo.delete(1).unwrap());
        assert!(repo.load_all().unwrap().is_empty());
        assert_eq!(repo.add(expense("2024-03-05", 100, "")).unwrap(), 1);
    }

    #[test]
    fn test_ids_stay_unique_across_adds_and_deletes() {
        let (_temp_dir, repo) = create_test_repo();
        for round in 0..5 {
            repo.add(expense("2024-03-05", 100, "")).unwrap();
            repo.add(expense("2024-03-05", 100, "")).unwrap();
            if round % 2 == 0 {
                let max = repo.load_all().unwrap().iter().map(|e| e.id).max().unwrap();
                repo.delete(max).unwrap();
            } else {
                repo.delete(1).unwrap();
            }
        }

        let all = repo.load_all().unwrap();
        let ids: HashSet<_> = all.iter().map(|e| e.id).collect();
        assert_eq!(ids.len(), all.len());
    }

    #[test]
    fn test_update_existing_and_missing() {
        let (_temp_dir, repo) = create_test_repo();
        repo.add(expense("2024-03-05", 100, "food")).unwrap();
        repo.add(expense("2024-03-06", 200, "bus")).unwrap();

        let mut changed = repo.find_by_id(1).unwrap().unwrap();
        changed.amount = Money::from_cents(999);
        changed.date = "2024-04-01".into();
        assert!(repo.update(changed.clone()).unwrap());

        let all = repo.load_all().unwrap();
        assert_eq!(all[0], changed);
        assert_eq!(all[1].id, 2);

        let ghost = Expense::with_id(77, "2024-01-01", Money::zero(), "", "");
        assert!(!repo.update(ghost).unwrap());
        assert_eq!(repo.load_all().unwrap().len(), 2);
    }

    #[test]
    fn test_delete_missing_leaves_file_alone() {
        let (_temp_dir, repo) = create_test_repo();
        assert!(!repo.delete(5).unwrap());
        assert!(!repo.path().exists());
    }

    #[test]
    fn test_find_by_month_year() {
        let (_temp_dir, repo) = create_test_repo();
        repo.add(expense("2024-03-05", 100, "")).unwrap();
        repo.add(expense("2024-03-28", 200, "")).unwrap();
        repo.add(expense("2024-04-01", 400, "")).unwrap();
        repo.add(expense("2023-03-05", 800, "")).unwrap();
        repo.add(expense("2024-3", 1600, "")).unwrap();

        let march = repo.find_by_month_year(2024, 3).unwrap();
        let ids: Vec<_> = march.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2]);

        assert_eq!(repo.total_for_month(2024, 3).unwrap(), Money::from_cents(300));
        assert_eq!(repo.total_for_month(2022, 1).unwrap(), Money::zero());
    }

    #[test]
    fn test_month_total_overflow_is_an_error() {
        let (_temp_dir, repo) = create_test_repo();
        let big = Money::parse("90000000000000000").unwrap();
        repo.add(Expense::new("2024-03-05", big, "a", "")).unwrap();
        repo.add(Expense::new("2024-03-06", big, "b", "")).unwrap();

        assert!(matches!(
            repo.total_for_month(2024, 3),
            Err(ExpenseError::Overflow(_))
        ));
        assert_eq!(repo.total_for_month(2024, 4).unwrap(), Money::zero());
    }

    #[test]
    fn test_find_by_category_ignores_case() {
        let (_temp_dir, repo) = create_test_repo();
        repo.add(expense("2024-03-05", 100, "Food")).unwrap();
        repo.add(expense("2024-03-06", 200, "food")).unwrap();
        repo.add(expense("2024-03-07", 400, "")).unwrap();
        repo.add(expense("2024-03-08", 800, "foods")).unwrap();

        assert_eq!(repo.find_by_category("FOOD").unwrap().len(), 2);
        assert_eq!(repo.find_by_category("travel").unwrap().len(), 0);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let (_temp_dir, repo) = create_test_repo();
        std::fs::write(repo.path(), "1|2024-03-05|oops|a|b\n").unwrap();

        assert!(matches!(
            repo.load_all().unwrap_err(),
            ExpenseError::Format { .. }
        ));
        assert!(repo.add(expense("2024-03-05", 100, "")).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_path_loads_empty_but_refuses_write() {
        let (temp_dir, _) = create_test_repo();
        // A directory stands in for an unreadable data file
        let dir_path = temp_dir.path().join("dir.txt");
        std::fs::create_dir(&dir_path).unwrap();
        let repo = ExpenseRepository::new(dir_path);

        assert!(repo.load_all().unwrap().is_empty());
        assert!(repo.add(expense("2024-03-05", 100, "")).is_err());
    }

    #[test]
    fn test_unreadable_line_blocks_rewrite() {
        let (_temp_dir, repo) = create_test_repo();
        let original: &[u8] =
            b"1|2024-03-05|5.00|a|b\n2|2024-03-08|1.00|caf\xff\xfe|c\n3|2024-03-09|2.00|d|e\n";
        std::fs::write(repo.path(), original).unwrap();

        assert!(repo.load_all().unwrap().is_empty());
        assert!(matches!(
            repo.add(expense("2024-03-10", 100, "")),
            Err(ExpenseError::Io(_))
        ));
        assert!(repo.delete(1).is_err());
        assert!(repo.update(Expense::with_id(3, "2024-03-09", Money::zero(), "", "")).is_err());

        assert_eq!(std::fs::read(repo.path()).unwrap(), original);
    }

    #[test]
    fn test_atomic_repo_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let repo =
            ExpenseRepository::new(temp_dir.path().join("expenses.txt")).with_atomic_writes(true);

        repo.add(expense("2024-03-05", 100, "food")).unwrap();
        assert_eq!(repo.load_all().unwrap().len(), 1);
    }
}

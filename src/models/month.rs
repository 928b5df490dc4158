//! Calendar month keys
//!
//! Expenses carry their date as free text (`YYYY-MM-DD`, never validated),
//! so months are recovered by slicing the string rather than by parsing a
//! calendar date.

use chrono::{Datelike, Local};
use std::fmt;

/// A (year, month) pair identifying one budget month
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// The month containing today's date on the local clock
    pub fn current() -> Self {
        let today = Local::now().date_naive();
        Self::new(today.year(), today.month())
    }

    /// Today's date in `YYYY-MM-DD` form, used when an expense has no date
    pub fn today_string() -> String {
        Local::now().date_naive().format("%Y-%m-%d").to_string()
    }

    /// Extract the month from a date string
    ///
    /// Reads the year from characters 1-4 and the month from characters 6-7.
    /// Returns `None` when the string is shorter than 7 characters or either
    /// slice is not a number.
    pub fn from_date_str(date: &str) -> Option<Self> {
        if date.len() < 7 {
            return None;
        }
        let year = date.get(0..4)?.parse::<i32>().ok()?;
        let month = date.get(5..7)?.parse::<u32>().ok()?;
        Some(Self::new(year, month))
    }

    /// Textual prefix match used by the month filter
    ///
    /// The date must start with the 4-digit year and a dash, and characters
    /// 6-7 must equal the zero-padded month.
    pub fn matches_prefix(&self, date: &str) -> bool {
        if date.len() < 7 {
            return false;
        }
        let year_prefix = format!("{:04}-", self.year);
        let month_part = format!("{:02}", self.month);
        date.get(0..5) == Some(year_prefix.as_str()) && date.get(5..7) == Some(month_part.as_str())
    }

    /// Numeric match: the date's year and month slices parse to this key
    pub fn matches_parsed(&self, date: &str) -> bool {
        Self::from_date_str(date) == Some(*self)
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.month, self.year)
    }
}

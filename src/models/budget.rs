//! Monthly budget model
//!
//! One spending limit per calendar month. The (year, month) pair is the key.

use super::money::Money;
use super::month::MonthKey;

/// A spending limit for one month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Budget {
    pub year: i32,

    /// Month number, 1-12
    pub month: u32,

    pub amount: Money,
}

impl Budget {
    pub fn new(year: i32, month: u32, amount: Money) -> Self {
        Self {
            year,
            month,
            amount,
        }
    }

    /// The key this budget is stored under
    pub fn key(&self) -> MonthKey {
        MonthKey::new(self.year, self.month)
    }

    /// Whether this budget covers the given month
    pub fn is_for(&self, key: MonthKey) -> bool {
        self.year == key.year && self.month == key.month
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_and_match() {
        let b = Budget::new(2024, 3, Money::from_cents(10000));
        assert_eq!(b.key(), MonthKey::new(2024, 3));
        assert!(b.is_for(MonthKey::new(2024, 3)));
        assert!(!b.is_for(MonthKey::new(2025, 3)));
    }
}

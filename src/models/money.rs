//! Money type for representing expense amounts
//!
//! Internally stores amounts in cents (i64) to avoid floating-point precision
//! issues. Provides safe arithmetic operations and formatting.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Largest exponent accepted in scientific notation
const MAX_EXPONENT: i32 = 18;

/// Represents a monetary amount stored as cents (hundredths of the unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use expense_cli::models::Money;
    /// let amount = Money::from_cents(1050); // 10.50
    /// assert_eq!(amount.to_string(), "10.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Add two amounts, or `None` if the result does not fit
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Subtract `other`, or `None` if the result does not fit
    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    /// Total of a sequence of amounts, or `None` on overflow
    pub fn checked_sum<I>(amounts: I) -> Option<Self>
    where
        I: IntoIterator<Item = Money>,
    {
        amounts
            .into_iter()
            .try_fold(Self::zero(), Self::checked_add)
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10.50", "-10.50", "10.5", "10", ".5", and scientific
    /// notation such as "1.0E7". Digits past the second decimal place are
    /// truncated.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let input = s.trim();
        let invalid = || MoneyParseError::InvalidFormat(input.to_string());

        let (negative, body) = if let Some(stripped) = input.strip_prefix('-') {
            (true, stripped)
        } else {
            (false, input)
        };

        let (mantissa, exponent) = match body.split_once(|c: char| c == 'e' || c == 'E') {
            Some((mantissa, exp)) => {
                let exp: i32 = exp.parse().map_err(|_| invalid())?;
                if !(-MAX_EXPONENT..=MAX_EXPONENT).contains(&exp) {
                    return Err(invalid());
                }
                (mantissa, exp)
            }
            None => (body, 0),
        };

        let (units_str, frac_str) = mantissa.split_once('.').unwrap_or((mantissa, ""));
        if units_str.is_empty() && frac_str.is_empty() {
            return Err(invalid());
        }
        if !units_str.bytes().all(|b| b.is_ascii_digit())
            || !frac_str.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }

        // Move the decimal point by the exponent
        let digits = [units_str, frac_str].concat();
        let point = units_str.len() as i32 + exponent;
        let (units_digits, frac_digits) = if point <= 0 {
            (String::new(), "0".repeat(point.unsigned_abs() as usize) + &digits)
        } else if point as usize >= digits.len() {
            let zeros = "0".repeat(point as usize - digits.len());
            (digits + &zeros, String::new())
        } else {
            let (units, frac) = digits.split_at(point as usize);
            (units.to_string(), frac.to_string())
        };

        let units: i64 = if units_digits.is_empty() {
            0
        } else {
            units_digits.parse().map_err(|_| invalid())?
        };

        // Pad or truncate the fraction to 2 digits
        let cents: i64 = match frac_digits.len() {
            0 => 0,
            1 => frac_digits.parse::<i64>().map_err(|_| invalid())? * 10,
            _ => frac_digits[..2].parse().map_err(|_| invalid())?,
        };

        let cents = units
            .checked_mul(100)
            .and_then(|c| c.checked_add(cents))
            .ok_or_else(invalid)?;

        Ok(Self(if negative { -cents } else { cents }))
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        let text = format!("{}{}.{:02}", sign, self.units().abs(), self.cents_part());
        // Route through `pad` so width/alignment specs work in tables
        f.pad(&text)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid amount: '{}'", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

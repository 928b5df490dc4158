//! Line codec for the flat data files
//!
//! Each record is one line of fields joined by `|`. Text fields are written
//! raw: a description or category containing `|` will shift the following
//! fields when the line is read back.

use thiserror::Error;

use crate::models::{Budget, Expense, Money};

/// Field separator used in the data files
pub const DELIMITER: char = '|';

/// Why a single line could not be decoded
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("expected at least {expected} fields, found {found}")]
    MissingFields { expected: usize, found: usize },

    #[error("invalid {field} '{value}'")]
    InvalidField { field: &'static str, value: String },
}

impl DecodeError {
    fn invalid(field: &'static str, value: &str) -> Self {
        Self::InvalidField {
            field,
            value: value.to_string(),
        }
    }
}

/// An entity that is persisted as one line of a data file
pub trait Record: Sized {
    /// Human-readable entity name used in log messages
    const NAME: &'static str;

    /// Serialize to a single line (without the trailing newline)
    fn encode(&self) -> String;

    /// Parse a single line produced by [`Record::encode`]
    fn decode(line: &str) -> Result<Self, DecodeError>;
}

/// Split a line on the delimiter, keeping trailing empty fields
fn split_fields(line: &str, required: usize) -> Result<Vec<&str>, DecodeError> {
    let fields: Vec<&str> = line.split(DELIMITER).collect();
    if fields.len() < required {
        return Err(DecodeError::MissingFields {
            expected: required,
            found: fields.len(),
        });
    }
    Ok(fields)
}

fn parse_amount(value: &str) -> Result<Money, DecodeError> {
    Money::parse(value).map_err(|_| DecodeError::invalid("amount", value))
}

impl Record for Expense {
    const NAME: &'static str = "expense";

    fn encode(&self) -> String {
        format!(
            "{id}{d}{date}{d}{amount}{d}{description}{d}{category}",
            id = self.id,
            date = self.date,
            amount = self.amount,
            description = self.description,
            category = self.category,
            d = DELIMITER,
        )
    }

    fn decode(line: &str) -> Result<Self, DecodeError> {
        let fields = split_fields(line, 3)?;

        let id = fields[0]
            .parse()
            .map_err(|_| DecodeError::invalid("id", fields[0]))?;
        let amount = parse_amount(fields[2])?;
        let description = fields.get(3).copied().unwrap_or_default();
        let category = fields.get(4).copied().unwrap_or_default();

        Ok(Expense::with_id(id, fields[1], amount, description, category))
    }
}

impl Record for Budget {
    const NAME: &'static str = "budget";

    fn encode(&self) -> String {
        format!(
            "{}{d}{}{d}{}",
            self.year,
            self.month,
            self.amount,
            d = DELIMITER
        )
    }

    fn decode(line: &str) -> Result<Self, DecodeError> {
        let fields = split_fields(line, 3)?;

        let year = fields[0]
            .parse()
            .map_err(|_| DecodeError::invalid("year", fields[0]))?;
        let month = fields[1]
            .parse()
            .map_err(|_| DecodeError::invalid("month", fields[1]))?;
        let amount = parse_amount(fields[2])?;

        Ok(Budget::new(year, month, amount))
    }
}

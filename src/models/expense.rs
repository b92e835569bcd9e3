//! Expense model
//!
//! An expense is a single recorded spending event. Expenses are created once
//! and never edited; the only way to change one is to delete it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::ids::ExpenseId;

/// Calendar date format used for input, storage and display
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier (creation timestamp in milliseconds)
    pub id: ExpenseId,

    /// Day the money was spent
    pub date: NaiveDate,

    /// Amount spent, never negative
    pub amount: f64,

    /// Category from the fixed set
    pub category: Category,

    /// Free-form description
    pub description: String,
}

impl Expense {
    /// Create a new expense
    pub fn new(
        id: ExpenseId,
        date: NaiveDate,
        amount: f64,
        category: Category,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            date,
            amount,
            category,
            description: description.into(),
        }
    }

    /// Validate the expense
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        check_amount(self.amount)?;
        Ok(())
    }
}

/// Parse a `YYYY-MM-DD` date
///
/// The input must have exactly that shape (four-digit year, two-digit month
/// and day) and name a real calendar day.
pub fn parse_date(input: &str) -> Result<NaiveDate, ExpenseValidationError> {
    let s = input.trim();
    let bytes = s.as_bytes();

    let well_formed = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });

    if !well_formed {
        return Err(ExpenseValidationError::InvalidDate(s.to_string()));
    }

    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .map_err(|_| ExpenseValidationError::InvalidDate(s.to_string()))
}

/// Parse a non-negative amount such as `"12.50"` or `"$12.50"`
pub fn parse_amount(input: &str) -> Result<f64, ExpenseValidationError> {
    let s = input.trim();
    let digits = s.strip_prefix('$').unwrap_or(s);

    let amount: f64 = digits
        .parse()
        .map_err(|_| ExpenseValidationError::InvalidAmount(s.to_string()))?;

    check_amount(amount)?;

    // abs() turns -0.0 into 0.0
    Ok(amount.abs())
}

fn check_amount(amount: f64) -> Result<(), ExpenseValidationError> {
    if !amount.is_finite() {
        return Err(ExpenseValidationError::InvalidAmount(amount.to_string()));
    }
    if amount < 0.0 {
        return Err(ExpenseValidationError::NegativeAmount(amount));
    }
    Ok(())
}

/// Validation errors for expense input
#[derive(Debug, Clone, PartialEq)]
pub enum ExpenseValidationError {
    InvalidDate(String),
    InvalidAmount(String),
    NegativeAmount(f64),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDate(s) => {
                write!(f, "date must be YYYY-MM-DD, got '{}'", s)
            }
            Self::InvalidAmount(s) => write!(f, "amount must be a number, got '{}'", s),
            Self::NegativeAmount(a) => write!(f, "amount cannot be negative: {}", a),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

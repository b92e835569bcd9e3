//! Core data models for the expense tracker
//!
//! This module contains the structures that represent a recorded expense,
//! the fixed category set, and expense identifiers.

pub mod category;
pub mod expense;
pub mod ids;

pub use category::{Category, CategoryParseError};
pub use expense::{parse_amount, parse_date, Expense, ExpenseValidationError, DATE_FORMAT};
pub use ids::{ExpenseId, IdGenerator};

//! Storage layer for the expense tracker
//!
//! The expense list is persisted as a whole: every load reads the full list
//! and every save rewrites it. `ExpenseStorage` is the seam between the store
//! and wherever the list lives; `JsonFileStorage` keeps it in a single JSON
//! file with atomic writes.

pub mod expenses;
pub mod file_io;

pub use expenses::JsonFileStorage;
pub use file_io::{read_json, write_json_atomic};

use crate::error::ExpenseResult;
use crate::models::Expense;

/// Persistence provider for the expense list
pub trait ExpenseStorage {
    /// Load the stored list
    ///
    /// Returns `Ok(None)` when nothing has been stored yet.
    fn load(&self) -> ExpenseResult<Option<Vec<Expense>>>;

    /// Replace the stored list with `expenses`
    fn save(&self, expenses: &[Expense]) -> ExpenseResult<()>;
}

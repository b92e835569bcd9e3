//! Service layer for the expense tracker
//!
//! The service layer provides business logic on top of the storage layer,
//! handling input validation, id assignment and summaries.

pub mod expense;

pub use expense::{CategoryTotal, ExpenseStore, ExpenseSummary, Mutation};

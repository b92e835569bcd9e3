//! Expense Tracker - personal expense tracking from the terminal
//!
//! This library provides the core functionality for the expense tracker: a
//! single user's list of expenses, persisted as one JSON file, with add,
//! list, filter, summarize and delete operations.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Data file location
//! - `error`: Custom error types
//! - `logging`: Tracing subscriber setup
//! - `models`: Expenses, categories and ids
//! - `storage`: Persistence provider trait and JSON file storage
//! - `services`: The expense store
//! - `display`: Text formatting
//! - `cli`: Interactive menu and one-shot commands
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::config::ExpensePaths;
//! use expense_tracker::services::ExpenseStore;
//! use expense_tracker::storage::JsonFileStorage;
//!
//! let paths = ExpensePaths::resolve(None);
//! let mut store = ExpenseStore::new(JsonFileStorage::from_paths(&paths));
//! store.load()?;
//! store.add("2025-03-23", "12.50", "1", "lunch")?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};
pub use logging::init_tracing;

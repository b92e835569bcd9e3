//! Configuration module for the expense tracker
//!
//! The only configurable aspect is where the expense list lives on disk.

pub mod paths;

pub use paths::ExpensePaths;

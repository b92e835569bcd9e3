//! Path management for the expense tracker
//!
//! ## Path Resolution Order
//!
//! 1. `--file` command-line flag (if given)
//! 2. `EXPENSE_TRACKER_FILE` environment variable (if set and non-empty)
//! 3. `expenses.json` in the current working directory

use std::path::{Path, PathBuf};

/// Environment variable that overrides the data file location
pub const DATA_FILE_ENV: &str = "EXPENSE_TRACKER_FILE";

/// File name used when nothing else is configured
pub const DEFAULT_DATA_FILE: &str = "expenses.json";

/// Resolved location of the expense data file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpensePaths {
    data_file: PathBuf,
}

impl ExpensePaths {
    /// Resolve the data file from an explicit path, the environment, or the default
    pub fn resolve(explicit: Option<PathBuf>) -> Self {
        Self::resolve_with(explicit, std::env::var(DATA_FILE_ENV).ok())
    }

    /// Resolution with the environment value passed in (useful for testing)
    pub fn resolve_with(explicit: Option<PathBuf>, env_value: Option<String>) -> Self {
        let data_file = explicit
            .or_else(|| {
                env_value
                    .filter(|v| !v.trim().is_empty())
                    .map(PathBuf::from)
            })
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE));

        Self { data_file }
    }

    /// Create ExpensePaths pointing at a specific file
    pub fn with_data_file(data_file: impl Into<PathBuf>) -> Self {
        Self {
            data_file: data_file.into(),
        }
    }

    /// Get the path to the expense data file
    pub fn data_file(&self) -> &Path {
        &self.data_file
    }
}

impl Default for ExpensePaths {
    fn default() -> Self {
        Self::with_data_file(DEFAULT_DATA_FILE)
    }
}

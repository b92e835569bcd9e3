//! JSON file storage for expenses
//!
//! The file holds a bare JSON array of expense objects.

use std::path::{Path, PathBuf};

use crate::config::ExpensePaths;
use crate::error::ExpenseResult;
use crate::models::Expense;

use super::file_io::{read_json, write_json_atomic};
use super::ExpenseStorage;

/// Expense list persisted to a single JSON file
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    /// Create a storage backed by `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a storage at the resolved data file location
    pub fn from_paths(paths: &ExpensePaths) -> Self {
        Self::new(paths.data_file())
    }

    /// Get the path of the data file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ExpenseStorage for JsonFileStorage {
    fn load(&self) -> ExpenseResult<Option<Vec<Expense>>> {
        read_json(&self.path)
    }

    fn save(&self, expenses: &[Expense]) -> ExpenseResult<()> {
        write_json_atomic(&self.path, expenses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, ExpenseId};
    use chrono::NaiveDate;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, JsonFileStorage) {
        let temp_dir = TempDir::new().unwrap();
        let storage = JsonFileStorage::new(temp_dir.path().join("expenses.json"));
        (temp_dir, storage)
    }

    fn lunch() -> Expense {
        Expense::new(
            ExpenseId::new(1),
            NaiveDate::from_ymd_opt(2025, 3, 23).unwrap(),
            100.0,
            Category::Food,
            "lunch",
        )
    }

    #[test]
    fn test_missing_file_loads_none() {
        let (_temp_dir, storage) = create_test_storage();
        assert!(storage.load().unwrap().is_none());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let (_temp_dir, storage) = create_test_storage();
        storage.save(&[lunch()]).unwrap();

        let loaded = storage.load().unwrap().unwrap();
        assert_eq!(loaded, vec![lunch()]);
    }

    #[test]
    fn test_file_layout() {
        let (_temp_dir, storage) = create_test_storage();
        storage.save(&[lunch()]).unwrap();

        let contents = fs::read_to_string(storage.path()).unwrap();
        let expected = r#"[
  {
    "id": 1,
    "date": "2025-03-23",
    "amount": 100.0,
    "category": "Food",
    "description": "lunch"
  }
]"#;
        assert_eq!(contents, expected);
    }

    #[test]
    fn test_reads_hand_written_file() {
        let (_temp_dir, storage) = create_test_storage();
        fs::write(
            storage.path(),
            r#"[{"id": 1, "date": "2025-03-23", "amount": 100, "category": "Food", "description": "lunch"}]"#,
        )
        .unwrap();

        assert_eq!(storage.load().unwrap().unwrap(), vec![lunch()]);
    }

    #[test]
    fn test_unknown_category_is_error() {
        let (_temp_dir, storage) = create_test_storage();
        fs::write(
            storage.path(),
            r#"[{"id": 1, "date": "2025-03-23", "amount": 100, "category": "Test", "description": "x"}]"#,
        )
        .unwrap();

        assert!(storage.load().unwrap_err().is_storage());
    }

    #[test]
    fn test_from_paths() {
        let paths = ExpensePaths::with_data_file("some/where.json");
        let storage = JsonFileStorage::from_paths(&paths);
        assert_eq!(storage.path(), Path::new("some/where.json"));
    }
}

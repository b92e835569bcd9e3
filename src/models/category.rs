//! Expense categories
//!
//! The category set is fixed: seven labels in a stable order. Interactive
//! input selects a category by its 1-based menu number; the one-shot CLI
//! also accepts the label itself.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One of the predefined expense categories
///
/// Serialized as its label (e.g. `"Food"`). The derived ordering follows the
/// menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Food,
    Groceries,
    Transportation,
    Entertainment,
    Bills,
    Utilities,
    Other,
}

impl Category {
    /// All categories in menu order
    pub fn all() -> &'static [Self] {
        &[
            Self::Food,
            Self::Groceries,
            Self::Transportation,
            Self::Entertainment,
            Self::Bills,
            Self::Utilities,
            Self::Other,
        ]
    }

    /// Get the display label for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Groceries => "Groceries",
            Self::Transportation => "Transportation",
            Self::Entertainment => "Entertainment",
            Self::Bills => "Bills",
            Self::Utilities => "Utilities",
            Self::Other => "Other",
        }
    }

    /// The 1-based number shown next to this category in menus
    pub fn menu_number(&self) -> usize {
        Self::all()
            .iter()
            .position(|c| c == self)
            .map(|i| i + 1)
            .unwrap_or(0)
    }

    /// Look up a category by its 1-based menu number
    pub fn from_menu_number(number: usize) -> Option<Self> {
        number
            .checked_sub(1)
            .and_then(|index| Self::all().get(index).copied())
    }

    /// Parse a user selection: a menu number (`"3"`) or a label (`"food"`)
    pub fn parse_selection(input: &str) -> Result<Self, CategoryParseError> {
        let input = input.trim();

        if let Ok(number) = input.parse::<usize>() {
            return Self::from_menu_number(number)
                .ok_or_else(|| CategoryParseError::OutOfRange(number));
        }

        input.parse()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::all()
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| CategoryParseError::Unknown(s.to_string()))
    }
}

/// Error returned when a category selection cannot be resolved
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CategoryParseError {
    #[error("category number {0} is out of range (1-7)")]
    OutOfRange(usize),

    #[error("unknown category '{0}'")]
    Unknown(String),
}

//! Expense identifiers
//!
//! Ids are millisecond timestamps taken at creation time. The generator never
//! issues an id at or below the last one it has seen, so two expenses added
//! within the same millisecond still get distinct, increasing ids.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Unique identifier of a stored expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(u64);

impl ExpenseId {
    /// Create an ID from a raw value
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Get the raw value
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ExpenseId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

/// Issues strictly increasing, timestamp-based expense ids
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: u64,
}

impl IdGenerator {
    /// Create a generator that has not seen any ids yet
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an existing id so later ids are issued above it
    pub fn observe(&mut self, id: ExpenseId) {
        self.last = self.last.max(id.value());
    }

    /// Issue the next id based on the current wall clock
    pub fn next_id(&mut self) -> ExpenseId {
        self.next_at(now_millis())
    }

    /// Issue the next id for a given timestamp in milliseconds
    pub fn next_at(&mut self, timestamp_millis: u64) -> ExpenseId {
        let id = timestamp_millis.max(self.last.saturating_add(1));
        self.last = id;
        ExpenseId(id)
    }
}

fn now_millis() -> u64 {
    u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0)
}

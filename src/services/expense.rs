//! Expense store
//!
//! Holds the in-memory expense list and implements add, list, filter,
//! summarize and delete on top of an [`ExpenseStorage`] provider. The list is
//! loaded once and written back in full after every change.

use std::collections::HashSet;

use tracing::{debug, error, info, warn};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{parse_amount, parse_date, Category, Expense, ExpenseId, IdGenerator};
use crate::storage::ExpenseStorage;

/// Result of a mutating operation
///
/// The in-memory change always stands. `save_error` is set when writing the
/// list back to storage failed, so the caller can report it.
#[derive(Debug)]
pub struct Mutation<T> {
    pub value: T,
    pub save_error: Option<ExpenseError>,
}

impl<T> Mutation<T> {
    /// Whether the change reached storage
    pub fn is_persisted(&self) -> bool {
        self.save_error.is_none()
    }
}

/// Spending for one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: Category,
    pub total: f64,
    pub count: usize,
}

/// Totals across all stored expenses
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseSummary {
    /// Sum of every amount
    pub total: f64,
    /// Number of expenses summarized
    pub count: usize,
    /// One entry per category that has expenses, in category order
    pub by_category: Vec<CategoryTotal>,
}

impl ExpenseSummary {
    /// Subtotal for a category, `None` if it has no expenses
    pub fn category_total(&self, category: Category) -> Option<f64> {
        self.by_category
            .iter()
            .find(|c| c.category == category)
            .map(|c| c.total)
    }
}

/// Owns the expense list and its persistence provider
pub struct ExpenseStore<S: ExpenseStorage> {
    storage: S,
    expenses: Vec<Expense>,
    ids: IdGenerator,
}

impl<S: ExpenseStorage> ExpenseStore<S> {
    /// Create an empty store; call [`load`](Self::load) to read existing data
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            expenses: Vec::new(),
            ids: IdGenerator::new(),
        }
    }

    /// Get the persistence provider
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Load expenses from storage
    ///
    /// A missing file yields an empty list. On any other failure the list is
    /// left empty and the error is returned for reporting.
    pub fn load(&mut self) -> ExpenseResult<usize> {
        self.expenses.clear();
        self.ids = IdGenerator::new();

        let loaded = match self.storage.load() {
            Ok(Some(expenses)) => expenses,
            Ok(None) => {
                debug!("no expense file yet, starting empty");
                return Ok(0);
            }
            Err(e) => {
                error!(error = %e, "failed to load expenses");
                return Err(e);
            }
        };

        let mut seen = HashSet::with_capacity(loaded.len());
        for expense in &loaded {
            let problem = match expense.validate() {
                Err(e) => Some(e.to_string()),
                Ok(()) if !seen.insert(expense.id) => Some("duplicate id".to_string()),
                Ok(()) => None,
            };

            if let Some(problem) = problem {
                warn!(id = %expense.id, %problem, "rejecting stored expenses");
                return Err(ExpenseError::Storage(format!(
                    "Invalid stored expense {}: {}",
                    expense.id, problem
                )));
            }
            self.ids.observe(expense.id);
        }

        self.expenses = loaded;
        info!(count = self.expenses.len(), "loaded expenses");
        Ok(self.expenses.len())
    }

    /// Write the full list to storage
    ///
    /// In-memory state is untouched whether or not the write succeeds.
    pub fn save(&self) -> ExpenseResult<()> {
        self.storage.save(&self.expenses).map_err(|e| {
            error!(error = %e, "failed to save expenses");
            e
        })
    }

    /// Validate user input and record a new expense
    ///
    /// `category` is a 1-based menu number or a category label. Nothing is
    /// stored if any field is invalid.
    pub fn add(
        &mut self,
        date: &str,
        amount: &str,
        category: &str,
        description: &str,
    ) -> ExpenseResult<Mutation<Expense>> {
        let date = parse_date(date).map_err(|e| ExpenseError::Validation(e.to_string()))?;
        let amount = parse_amount(amount).map_err(|e| ExpenseError::Validation(e.to_string()))?;
        let category = Category::parse_selection(category)
            .map_err(|e| ExpenseError::Validation(e.to_string()))?;

        let expense = Expense::new(
            self.ids.next_id(),
            date,
            amount,
            category,
            description,
        );

        self.expenses.push(expense.clone());
        debug!(id = %expense.id, %category, amount, "added expense");

        Ok(self.commit(expense))
    }

    /// All expenses in insertion order
    pub fn list(&self) -> &[Expense] {
        &self.expenses
    }

    /// Number of stored expenses
    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    /// Whether the store holds no expenses
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Look up an expense by id
    pub fn get(&self, id: ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    /// Expenses recorded on exactly `date` (`YYYY-MM-DD`)
    pub fn filter_by_date(&self, date: &str) -> ExpenseResult<Vec<Expense>> {
        let date = parse_date(date).map_err(|e| ExpenseError::Validation(e.to_string()))?;

        Ok(self
            .expenses
            .iter()
            .filter(|e| e.date == date)
            .cloned()
            .collect())
    }

    /// Expenses in the category given by menu number or label
    ///
    /// An unknown selection is a validation error, distinct from an empty
    /// result.
    pub fn filter_by_category(&self, category: &str) -> ExpenseResult<Vec<Expense>> {
        let category = Category::parse_selection(category)
            .map_err(|e| ExpenseError::Validation(e.to_string()))?;

        Ok(self.expenses_in(category))
    }

    /// Expenses in `category`, in list order
    pub fn expenses_in(&self, category: Category) -> Vec<Expense> {
        self.expenses
            .iter()
            .filter(|e| e.category == category)
            .cloned()
            .collect()
    }

    /// Total and per-category spending, `None` when there is nothing to summarize
    pub fn summarize(&self) -> Option<ExpenseSummary> {
        if self.expenses.is_empty() {
            return None;
        }

        let by_category = Category::all()
            .iter()
            .filter_map(|&category| {
                let (total, count) = self
                    .expenses
                    .iter()
                    .filter(|e| e.category == category)
                    .fold((0.0, 0), |(sum, n), e| (sum + e.amount, n + 1));

                (count > 0).then_some(CategoryTotal {
                    category,
                    total,
                    count,
                })
            })
            .collect();

        Some(ExpenseSummary {
            total: self.expenses.iter().map(|e| e.amount).sum(),
            count: self.expenses.len(),
            by_category,
        })
    }

    /// Remove the expense with `id`
    pub fn delete(&mut self, id: ExpenseId) -> ExpenseResult<Mutation<Expense>> {
        let index = self
            .expenses
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| ExpenseError::expense_not_found(id.to_string()))?;

        let removed = self.expenses.remove(index);
        debug!(id = %removed.id, "deleted expense");

        Ok(self.commit(removed))
    }

    /// Remove the expense whose id is typed as text
    pub fn delete_by_input(&mut self, id: &str) -> ExpenseResult<Mutation<Expense>> {
        let id: ExpenseId = id.parse().map_err(|_| {
            ExpenseError::Validation(format!("ID must be a number, got '{}'", id.trim()))
        })?;
        self.delete(id)
    }

    fn commit<T>(&self, value: T) -> Mutation<T> {
        Mutation {
            value,
            save_error: self.save().err(),
        }
    }
}

//! One-shot CLI commands
//!
//! Each subcommand performs a single store operation and exits. Failures are
//! returned as errors so the process exits non-zero.

use clap::Subcommand;

use crate::display::{
    format_category_menu, format_expense_line, format_expense_list, format_filtered_list,
    format_summary,
};
use crate::error::{ExpenseError, ExpenseResult};
use crate::services::{ExpenseStore, Mutation};
use crate::storage::ExpenseStorage;

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// Date of the expense (YYYY-MM-DD)
        #[arg(short, long)]
        date: String,
        /// Amount spent (e.g. "12.50")
        #[arg(short, long)]
        amount: String,
        /// Category number (1-7) or name
        #[arg(short, long)]
        category: String,
        /// Description
        #[arg(long, default_value = "")]
        description: String,
    },

    /// List all expenses
    #[command(alias = "ls")]
    List,

    /// Show expenses for one date or one category
    Filter {
        /// Exact date (YYYY-MM-DD)
        #[arg(short, long, conflicts_with = "category", required_unless_present = "category")]
        date: Option<String>,
        /// Category number (1-7) or name
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Show total spending and a per-category breakdown
    Summary,

    /// Delete an expense by ID
    #[command(alias = "rm")]
    Delete {
        /// Expense ID (see `list`)
        id: String,
    },

    /// List the available categories
    Categories,
}

/// Handle an expense command
pub fn handle_command<S: ExpenseStorage>(
    store: &mut ExpenseStore<S>,
    cmd: ExpenseCommands,
) -> ExpenseResult<()> {
    match cmd {
        ExpenseCommands::Add {
            date,
            amount,
            category,
            description,
        } => {
            let expense = persisted(store.add(&date, &amount, &category, &description)?)?;
            println!("Expense was added successfully.");
            println!("{}", format_expense_line(&expense));
        }

        ExpenseCommands::List => {
            print!("{}", format_expense_list(store.list()));
        }

        ExpenseCommands::Filter { date, category } => {
            let filtered = match (date, category) {
                (Some(date), _) => store.filter_by_date(&date)?,
                (None, Some(category)) => store.filter_by_category(&category)?,
                (None, None) => {
                    return Err(ExpenseError::Validation(
                        "specify --date or --category".into(),
                    ))
                }
            };
            print!("{}", format_filtered_list(&filtered));
        }

        ExpenseCommands::Summary => {
            print!("{}", format_summary(store.summarize().as_ref()));
        }

        ExpenseCommands::Delete { id } => {
            let removed = persisted(store.delete_by_input(&id)?)?;
            println!("Expense deleted successfully.");
            println!("{}", format_expense_line(&removed));
        }

        ExpenseCommands::Categories => {
            print!("{}", format_category_menu("Categories:"));
        }
    }

    Ok(())
}

/// A one-shot command has nothing to show for a change that was not saved
fn persisted<T>(mutation: Mutation<T>) -> ExpenseResult<T> {
    match mutation.save_error {
        Some(e) => Err(e),
        None => Ok(mutation.value),
    }
}

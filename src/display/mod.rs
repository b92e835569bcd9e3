//! Display formatting for terminal output
//!
//! Renders expenses, summaries and the category menu as plain text.

pub mod expense;

pub use expense::{
    format_category_menu, format_expense_line, format_expense_list, format_filtered_list,
    format_summary,
};

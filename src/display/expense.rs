//! Expense display formatting

use crate::models::{Category, Expense};
use crate::services::ExpenseSummary;

/// Format a single expense on one line
pub fn format_expense_line(expense: &Expense) -> String {
    format!(
        "ID: {}, Date: {}, Amount: ${:.2}, Category: {}, Description: {}",
        expense.id,
        expense.date.format(crate::models::DATE_FORMAT),
        expense.amount,
        expense.category,
        expense.description
    )
}

/// Format the full expense list
pub fn format_expense_list(expenses: &[Expense]) -> String {
    if expenses.is_empty() {
        return "No expenses were found.\n".to_string();
    }

    let mut output = String::from("Expenses:\n");
    push_lines(&mut output, expenses);
    output
}

/// Format the result of a filter
pub fn format_filtered_list(expenses: &[Expense]) -> String {
    if expenses.is_empty() {
        return "There are no expenses that match the filter.\n".to_string();
    }

    let mut output = String::from("Filtered Expenses:\n");
    push_lines(&mut output, expenses);
    output
}

fn push_lines(output: &mut String, expenses: &[Expense]) {
    for expense in expenses {
        output.push_str(&format_expense_line(expense));
        output.push('\n');
    }
}

/// Format the total and per-category breakdown
pub fn format_summary(summary: Option<&ExpenseSummary>) -> String {
    let Some(summary) = summary else {
        return "No expenses to summarize.\n".to_string();
    };

    let mut output = format!("Total Expenses: ${:.2}\n", summary.total);
    output.push_str("Expenses by Category:\n");

    for entry in &summary.by_category {
        output.push_str(&format!("{}: ${:.2}\n", entry.category, entry.total));
    }

    output
}

/// Format the numbered category list shown before a category prompt
pub fn format_category_menu(header: &str) -> String {
    let mut output = format!("{}\n", header);
    for category in Category::all() {
        output.push_str(&format!("{}. {}\n", category.menu_number(), category));
    }
    output
}

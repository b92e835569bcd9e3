//! Interactive menu
//!
//! Numbered options 1-6 drive the store until the user exits or input runs
//! out. Every failure is reported and the loop carries on.

use std::io::Write;

use tracing::debug;

use crate::display::{
    format_category_menu, format_expense_list, format_filtered_list, format_summary,
};
use crate::error::{ExpenseError, ExpenseResult};
use crate::services::{ExpenseStore, Mutation};
use crate::storage::ExpenseStorage;

use super::prompt::Prompt;

const MENU: &str = "\n--- Expense Tracker Menu ---\n\
                    1. Add an Expense\n\
                    2. View All Expenses\n\
                    3. Filter Expenses\n\
                    4. View Summary\n\
                    5. Delete Expense\n\
                    6. Exit\n";

const FAREWELL: &str = "Thanks for running the Application, Have a nice day!";

enum Flow {
    Continue,
    Exit,
}

/// Run the menu loop until option 6 or end of input
///
/// Only I/O errors on the console itself end the loop early.
pub fn run_menu<S, C>(store: &mut ExpenseStore<S>, console: &mut C) -> ExpenseResult<()>
where
    S: ExpenseStorage,
    C: Prompt + Write,
{
    loop {
        write!(console, "{}", MENU)?;

        let Some(choice) = console.ask("Choose an option: ")? else {
            writeln!(console)?;
            break;
        };

        debug!(choice = choice.trim(), "menu selection");

        let flow = match choice.trim() {
            "1" => add_expense(store, console)?,
            "2" => {
                write!(console, "{}", format_expense_list(store.list()))?;
                Flow::Continue
            }
            "3" => filter_expenses(store, console)?,
            "4" => {
                write!(console, "{}", format_summary(store.summarize().as_ref()))?;
                Flow::Continue
            }
            "5" => delete_expense(store, console)?,
            "6" => Flow::Exit,
            _ => {
                writeln!(
                    console,
                    "You have selected an invalid option. Please enter a number between 1 and 6."
                )?;
                Flow::Continue
            }
        };

        if let Flow::Exit = flow {
            break;
        }
    }

    writeln!(console, "{}", FAREWELL)?;
    Ok(())
}

fn add_expense<S, C>(store: &mut ExpenseStore<S>, console: &mut C) -> ExpenseResult<Flow>
where
    S: ExpenseStorage,
    C: Prompt + Write,
{
    let Some(date) = console.ask("Enter the date (YYYY-MM-DD): ")? else {
        return Ok(Flow::Exit);
    };
    let Some(amount) = console.ask("Enter an amount: ")? else {
        return Ok(Flow::Exit);
    };

    write!(console, "{}", format_category_menu("Select a category:"))?;
    let Some(category) = console.ask("Enter category number: ")? else {
        return Ok(Flow::Exit);
    };

    let Some(description) = console.ask("Enter the expense description: ")? else {
        return Ok(Flow::Exit);
    };

    match store.add(&date, &amount, &category, &description) {
        Ok(mutation) => {
            report_save_error(console, &mutation)?;
            writeln!(console, "Expense was added successfully.")?;
        }
        Err(ExpenseError::Validation(reason)) => {
            writeln!(
                console,
                "Invalid input ({}). Expense was not added.",
                reason
            )?;
        }
        Err(e) => writeln!(console, "Error adding the expense: {}", e)?,
    }

    Ok(Flow::Continue)
}

fn filter_expenses<S, C>(store: &ExpenseStore<S>, console: &mut C) -> ExpenseResult<Flow>
where
    S: ExpenseStorage,
    C: Prompt + Write,
{
    let Some(filter_by) = console.ask("Filter using (date/category): ")? else {
        return Ok(Flow::Exit);
    };

    let result = match filter_by.trim().to_lowercase().as_str() {
        "date" => {
            let Some(date) = console.ask("Enter start date (YYYY-MM-DD) of the expense: ")? else {
                return Ok(Flow::Exit);
            };
            store
                .filter_by_date(&date)
                .map_err(|_| "Invalid date format (must be YYYY-MM-DD).")
        }
        "category" => {
            write!(
                console,
                "{}",
                format_category_menu("Select a category to filter by:")
            )?;
            let Some(category) = console.ask("Enter category number: ")? else {
                return Ok(Flow::Exit);
            };
            store
                .filter_by_category(&category)
                .map_err(|_| "Invalid category selected.")
        }
        _ => Err("Invalid filter selected. Please enter \"date\" or \"category\"."),
    };

    match result {
        Ok(filtered) => write!(console, "{}", format_filtered_list(&filtered))?,
        Err(message) => writeln!(console, "{}", message)?,
    }

    Ok(Flow::Continue)
}

fn delete_expense<S, C>(store: &mut ExpenseStore<S>, console: &mut C) -> ExpenseResult<Flow>
where
    S: ExpenseStorage,
    C: Prompt + Write,
{
    let Some(id) = console.ask("Enter expense ID to delete (Use option 2 to view all IDs): ")?
    else {
        return Ok(Flow::Exit);
    };

    match store.delete_by_input(&id) {
        Ok(mutation) => {
            report_save_error(console, &mutation)?;
            writeln!(console, "Expense deleted successfully.")?;
        }
        Err(e) if e.is_not_found() => writeln!(console, "Expense not found.")?,
        Err(e) if e.is_validation() => writeln!(console, "Invalid ID (must be a number).")?,
        Err(e) => writeln!(console, "Error deleting the expense: {}", e)?,
    }

    Ok(Flow::Continue)
}

fn report_save_error<C: Write, T>(console: &mut C, mutation: &Mutation<T>) -> ExpenseResult<()> {
    if let Some(e) = &mutation.save_error {
        writeln!(console, "Error saving the expenses, try again: {}", e)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::prompt::LinePrompt;
    use crate::models::Category;
    use crate::storage::JsonFileStorage;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, ExpenseStore<JsonFileStorage>) {
        let temp_dir = TempDir::new().unwrap();
        let storage = JsonFileStorage::new(temp_dir.path().join("expenses.json"));
        let mut store = ExpenseStore::new(storage);
        store.load().unwrap();
        (temp_dir, store)
    }

    /// Run the menu over scripted input and return everything it printed
    fn run_script(store: &mut ExpenseStore<JsonFileStorage>, input: &str) -> String {
        let mut console = LinePrompt::new(Cursor::new(input.to_string()), Vec::new());
        run_menu(store, &mut console).unwrap();
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn test_exit_immediately() {
        let (_temp_dir, mut store) = create_test_store();
        let output = run_script(&mut store, "6\n");

        assert!(output.contains("--- Expense Tracker Menu ---"));
        assert!(output.contains("6. Exit"));
        assert!(output.ends_with(&format!("{}\n", FAREWELL)));
    }

    #[test]
    fn test_end_of_input_exits() {
        let (_temp_dir, mut store) = create_test_store();
        let output = run_script(&mut store, "");
        assert!(output.contains(FAREWELL));
    }

    #[test]
    fn test_invalid_option_redisplays_menu() {
        let (_temp_dir, mut store) = create_test_store();
        let output = run_script(&mut store, "9\nabc\n6\n");

        assert_eq!(
            output
                .matches("You have selected an invalid option.")
                .count(),
            2
        );
        assert_eq!(output.matches("--- Expense Tracker Menu ---").count(), 3);
    }

    #[test]
    fn test_add_then_view() {
        let (_temp_dir, mut store) = create_test_store();
        let output = run_script(&mut store, "1\n2025-03-23\n100\n1\nlunch\n2\n6\n");

        assert!(output.contains("Select a category:\n1. Food\n"));
        assert!(output.contains("Expense was added successfully."));
        assert_eq!(store.len(), 1);

        let expense = &store.list()[0];
        assert_eq!(expense.category, Category::Food);
        assert!(output.contains(&format!(
            "ID: {}, Date: 2025-03-23, Amount: $100.00, Category: Food, Description: lunch",
            expense.id
        )));
    }

    #[test]
    fn test_add_invalid_input() {
        let (_temp_dir, mut store) = create_test_store();
        let output = run_script(
            &mut store,
            "1\n2025/03/23\n100\n1\nx\n1\n2025-03-23\nabc\n1\nx\n1\n2025-03-23\n5\n12\nx\n6\n",
        );

        assert_eq!(output.matches("Expense was not added.").count(), 3);
        assert!(store.is_empty());
    }

    #[test]
    fn test_view_empty() {
        let (_temp_dir, mut store) = create_test_store();
        let output = run_script(&mut store, "2\n4\n6\n");

        assert!(output.contains("No expenses were found."));
        assert!(output.contains("No expenses to summarize."));
    }

    #[test]
    fn test_filter_flows() {
        let (_temp_dir, mut store) = create_test_store();
        store.add("2025-03-23", "10", "1", "lunch").unwrap();
        store.add("2025-03-24", "20", "5", "power").unwrap();

        let output = run_script(
            &mut store,
            "3\ndate\n2025-03-24\n3\ncategory\n1\n3\ncategory\n3\n3\ncategory\n99\n3\ndate\nyesterday\n3\namount\n6\n",
        );

        assert!(output.contains("Enter start date (YYYY-MM-DD) of the expense: "));
        assert!(output.contains("Filtered Expenses:\n"));
        assert!(output.contains("Description: power"));
        assert!(output.contains("Description: lunch"));
        assert!(output.contains("There are no expenses that match the filter."));
        assert!(output.contains("Invalid category selected."));
        assert!(output.contains("Invalid date format (must be YYYY-MM-DD)."));
        assert!(output.contains("Invalid filter selected."));
    }

    #[test]
    fn test_summary_output() {
        let (_temp_dir, mut store) = create_test_store();
        store.add("2025-03-23", "10", "Food", "").unwrap();
        store.add("2025-03-23", "2.5", "Food", "").unwrap();
        store.add("2025-03-24", "7", "Other", "").unwrap();

        let output = run_script(&mut store, "4\n6\n");
        assert!(output.contains(
            "Total Expenses: $19.50\nExpenses by Category:\nFood: $12.50\nOther: $7.00\n"
        ));
    }

    #[test]
    fn test_delete_flows() {
        let (_temp_dir, mut store) = create_test_store();
        let id = store.add("2025-03-23", "10", "1", "lunch").unwrap().value.id;

        let script = format!("5\nnope\n5\n{}\n5\n{}\n6\n", id.value() + 1, id);
        let output = run_script(&mut store, &script);

        assert!(output.contains("Invalid ID (must be a number)."));
        assert!(output.contains("Expense not found."));
        assert!(output.contains("Expense deleted successfully."));
        assert!(store.is_empty());
    }

    #[test]
    fn test_input_ends_mid_add() {
        let (_temp_dir, mut store) = create_test_store();
        let output = run_script(&mut store, "1\n2025-03-23\n");

        assert!(store.is_empty());
        assert!(output.contains(FAREWELL));
    }
}

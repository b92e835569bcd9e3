use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use expense_tracker::cli::{handle_command, run_menu, ExpenseCommands, LinePrompt};
use expense_tracker::config::ExpensePaths;
use expense_tracker::services::ExpenseStore;
use expense_tracker::storage::JsonFileStorage;

#[derive(Parser)]
#[command(
    name = "expense-tracker",
    version,
    about = "Track personal expenses from the terminal",
    long_about = "Record, list, filter, summarize and delete expenses stored in a local \
                  JSON file. Run without a subcommand for the interactive menu."
)]
struct Cli {
    /// Path to the expense data file [default: $EXPENSE_TRACKER_FILE or ./expenses.json]
    #[arg(short, long, global = true, value_name = "PATH")]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<ExpenseCommands>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    expense_tracker::init_tracing();

    let paths = ExpensePaths::resolve(cli.file);
    let mut store = ExpenseStore::new(JsonFileStorage::from_paths(&paths));

    match cli.command {
        Some(cmd) => {
            store.load()?;
            handle_command(&mut store, cmd)?;
        }
        None => {
            if let Err(e) = store.load() {
                println!("Error loading expenses: {}", e);
            }

            let stdin = io::stdin();
            let mut console = LinePrompt::new(stdin.lock(), io::stdout());
            run_menu(&mut store, &mut console)?;
        }
    }

    Ok(())
}

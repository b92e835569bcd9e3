//! CLI front ends
//!
//! Two ways to drive the expense store: the interactive numbered menu, and
//! one-shot clap subcommands.

pub mod commands;
pub mod menu;
pub mod prompt;

pub use commands::{handle_command, ExpenseCommands};
pub use menu::run_menu;
pub use prompt::{LinePrompt, Prompt};

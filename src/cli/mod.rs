//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the expense store.

pub mod expense;
pub mod history;
pub mod report;

pub use expense::{handle_expense_command, print_summary, ExpenseCommands};
pub use history::handle_history_command;
pub use report::{handle_report_command, ReportArgs};

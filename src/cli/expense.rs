//! Expense CLI commands
//!
//! Add, list, show and delete expenses, and print the derived views.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{
    format_balance, format_category_breakdown, format_expense_details, format_expense_table,
    format_month_selector,
};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{ExpenseId, NewExpense, DATE_FORMAT};
use crate::services::ExpenseStore;
use crate::storage::KeyValueStore;

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// What the money was spent on
        description: String,
        /// Amount spent (e.g. "3.50")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Category label (free-form)
        category: String,
        /// Expense date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
    /// List expenses for the current month filter
    #[command(alias = "ls")]
    List,
    /// Show a single expense
    Show {
        /// Expense ID
        id: String,
    },
    /// Delete an expense
    #[command(alias = "rm")]
    Delete {
        /// Expense ID
        id: String,
    },
    /// Show the total spent
    Balance,
    /// Show spending per category
    Categories,
    /// List the months that have expenses
    Months,
}

/// Handle an expense command
pub fn handle_expense_command<S: KeyValueStore>(
    store: &mut ExpenseStore<S>,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> ExpenseResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ExpenseCommands::Add {
            description,
            amount,
            category,
            date,
        } => {
            let date = date.unwrap_or_else(|| {
                chrono::Local::now()
                    .date_naive()
                    .format(DATE_FORMAT)
                    .to_string()
            });

            let expense = store.add(&NewExpense::new(description, amount, category, date))?;

            println!("Added expense:");
            print!("{}", format_expense_details(&expense, symbol));
            println!();
            println!("Total Expenses: {}", format_balance(store.balance(), symbol));
        }

        ExpenseCommands::List => {
            print!("{}", format_expense_table(&store.filtered(), symbol));
        }

        ExpenseCommands::Show { id } => {
            let id = parse_id(&id)?;
            let expense = store
                .get(id)
                .ok_or_else(|| ExpenseError::expense_not_found(id.to_string()))?;
            print!("{}", format_expense_details(expense, symbol));
        }

        ExpenseCommands::Delete { id } => {
            let id = parse_id(&id)?;
            if store.remove(id)? {
                println!("Deleted expense {}", id);
                println!("Total Expenses: {}", format_balance(store.balance(), symbol));
            } else {
                println!("No expense with ID {}", id);
            }
        }

        ExpenseCommands::Balance => {
            println!("Total Expenses: {}", format_balance(store.balance(), symbol));
        }

        ExpenseCommands::Categories => {
            print!("{}", format_category_breakdown(&store.category_totals(), symbol));
        }

        ExpenseCommands::Months => {
            print!(
                "{}",
                format_month_selector(&store.distinct_months(), store.month_filter())
            );
        }
    }

    Ok(())
}

/// Default view: balance followed by the expense list
pub fn print_summary<S: KeyValueStore>(store: &ExpenseStore<S>, settings: &Settings) {
    let symbol = settings.currency_symbol.as_str();

    if !store.month_filter().is_empty() {
        println!("Month: {}", store.month_filter());
    }
    println!("Total Expenses: {}", format_balance(store.balance(), symbol));
    println!();
    print!("{}", format_expense_table(&store.filtered(), symbol));
}

fn parse_id(raw: &str) -> ExpenseResult<ExpenseId> {
    raw.parse()
        .map_err(|_| ExpenseError::Validation(format!("Invalid expense ID: '{}'", raw)))
}

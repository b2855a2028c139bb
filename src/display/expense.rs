//! Expense list and detail formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Expense;

use super::format::truncate;

const DESCRIPTION_WIDTH: usize = 32;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

impl ExpenseRow {
    fn new(expense: &Expense, currency_symbol: &str) -> Self {
        Self {
            id: expense.id.to_string(),
            date: expense.date_string(),
            description: truncate(&expense.description, DESCRIPTION_WIDTH),
            category: expense.category.to_string(),
            amount: expense.amount.format_with_symbol(currency_symbol),
        }
    }
}

/// Format expenses as a table
pub fn format_expense_table(expenses: &[&Expense], currency_symbol: &str) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let rows: Vec<ExpenseRow> = expenses
        .iter()
        .map(|e| ExpenseRow::new(e, currency_symbol))
        .collect();

    let mut output = Table::new(rows).with(Style::sharp()).to_string();
    output.push('\n');
    output
}

/// Format a single expense for display
pub fn format_expense_details(expense: &Expense, currency_symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Expense:     {}\n", expense.id));
    output.push_str(&format!("Description: {}\n", expense.description));
    output.push_str(&format!(
        "Amount:      {}\n",
        expense.amount.format_with_symbol(currency_symbol)
    ));
    output.push_str(&format!("Category:    {}\n", expense.category));
    output.push_str(&format!("Date:        {}\n", expense.date_string()));
    output.push_str(&format!("Month:       {}\n", expense.month().label()));

    output
}

//! Balance readout, category breakdown and month selector

use crate::models::{Money, Month};
use crate::services::CategoryTotals;

use super::format::{format_bar, format_percentage, separator, truncate};

const BAR_WIDTH: usize = 20;
const LABEL_WIDTH: usize = 18;

/// Balance readout, shown as the absolute amount spent
pub fn format_balance(balance: Money, currency_symbol: &str) -> String {
    balance.abs().format_with_symbol(currency_symbol)
}

/// Text stand-in for the category pie chart
///
/// One line per category, largest first, with a proportional bar.
pub fn format_category_breakdown(totals: &CategoryTotals, currency_symbol: &str) -> String {
    if totals.is_empty() {
        return "No expenses to chart.\n".to_string();
    }

    let entries = totals.by_amount();
    let max = entries
        .first()
        .map(|(_, amount)| *amount)
        .unwrap_or_default();

    let mut output = String::new();
    for (category, amount) in &entries {
        output.push_str(&format!(
            "{:<label$} {:>12} {:>6} {}\n",
            truncate(category.as_str(), LABEL_WIDTH),
            amount.format_with_symbol(currency_symbol),
            format_percentage(totals.percentage(*amount)),
            format_bar(*amount, max, BAR_WIDTH),
            label = LABEL_WIDTH,
        ));
    }
    output.push_str(&separator(LABEL_WIDTH + 12 + 6 + BAR_WIDTH + 3));
    output.push('\n');
    output.push_str(&format!(
        "{:<label$} {:>12}\n",
        "Total",
        totals.total().format_with_symbol(currency_symbol),
        label = LABEL_WIDTH,
    ));

    output
}

/// Month selector options, "Show All Months" first
pub fn format_month_selector(months: &[Month], current_filter: &str) -> String {
    let marker = |selected: bool| if selected { "*" } else { " " };

    let mut output = format!("{} {:<8} Show All Months\n", marker(current_filter.is_empty()), "");
    for month in months {
        let key = month.to_string();
        output.push_str(&format!(
            "{} {:<8} {}\n",
            marker(key == current_filter),
            key,
            month.label()
        ));
    }
    output
}

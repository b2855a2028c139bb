//! Plain-text report

use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};

use super::report::ExpenseReport;

/// Write the numbered expense list followed by the total
pub fn write_text_report<W: Write>(
    report: &ExpenseReport,
    currency_symbol: &str,
    writer: &mut W,
) -> ExpenseResult<()> {
    write_lines(report, currency_symbol, writer).map_err(|e| ExpenseError::Export(e.to_string()))
}

fn write_lines<W: Write>(
    report: &ExpenseReport,
    currency_symbol: &str,
    writer: &mut W,
) -> std::io::Result<()> {
    writeln!(writer, "{}", report.title)?;
    writeln!(writer, "Period: {}", report.period_label())?;
    writeln!(writer)?;

    for (index, expense) in report.expenses.iter().enumerate() {
        writeln!(
            writer,
            "{}. {} - {}",
            index + 1,
            expense.description,
            expense.amount.format_with_symbol(currency_symbol)
        )?;
    }

    writeln!(writer)?;
    writeln!(
        writer,
        "Total Expenses: {}",
        report.total_expenses.format_with_symbol(currency_symbol)
    )?;

    Ok(())
}

//! CSV report

use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};

use super::report::ExpenseReport;

/// Write one CSV row per expense
pub fn write_csv_report<W: Write>(report: &ExpenseReport, writer: &mut W) -> ExpenseResult<()> {
    let export_err = |e: csv::Error| ExpenseError::Export(e.to_string());

    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer
        .write_record(["ID", "Date", "Description", "Category", "Amount"])
        .map_err(export_err)?;

    for expense in &report.expenses {
        csv_writer
            .write_record([
                expense.id.to_string(),
                expense.date_string(),
                expense.description.clone(),
                expense.category.to_string(),
                expense.amount.to_string(),
            ])
            .map_err(export_err)?;
    }

    csv_writer
        .flush()
        .map_err(|e| ExpenseError::Export(e.to_string()))?;

    Ok(())
}

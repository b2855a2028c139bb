//! JSON report

use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};

use super::report::ExpenseReport;

/// Serialize the report as JSON
pub fn write_json_report<W: Write>(
    report: &ExpenseReport,
    writer: &mut W,
    pretty: bool,
) -> ExpenseResult<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *writer, report)
    } else {
        serde_json::to_writer(&mut *writer, report)
    }
    .map_err(|e| ExpenseError::Export(e.to_string()))?;

    writeln!(writer).map_err(|e| ExpenseError::Export(e.to_string()))?;
    Ok(())
}

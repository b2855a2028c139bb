//! YAML report

use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};

use super::report::ExpenseReport;

/// Serialize the report as YAML with a short header comment
pub fn write_yaml_report<W: Write>(report: &ExpenseReport, writer: &mut W) -> ExpenseResult<()> {
    let export_err = |e: std::io::Error| ExpenseError::Export(e.to_string());

    writeln!(writer, "# {}", report.title).map_err(export_err)?;
    writeln!(writer, "# Generated: {}", report.generated_at).map_err(export_err)?;
    writeln!(writer).map_err(export_err)?;

    serde_yaml::to_writer(writer, report).map_err(|e| ExpenseError::Export(e.to_string()))?;

    Ok(())
}

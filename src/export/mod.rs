//! Report export for the expense tracker
//!
//! Turns the filtered expense list and its total into a downloadable
//! document:
//! - Text: numbered list with a total line, for reading or printing
//! - CSV: one row per expense (spreadsheet-compatible)
//! - JSON / YAML: the full report structure, machine-readable

pub mod csv;
pub mod json;
pub mod report;
pub mod text;
pub mod yaml;

pub use self::csv::write_csv_report;
pub use json::write_json_report;
pub use report::{ExpenseReport, REPORT_SCHEMA_VERSION};
pub use text::write_text_report;
pub use yaml::write_yaml_report;

use std::io::Write;

use crate::error::ExpenseResult;

/// Report output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ReportFormat {
    /// Plain text, numbered list with total
    #[default]
    Text,
    /// CSV rows
    Csv,
    /// Pretty-printed JSON
    Json,
    /// YAML
    Yaml,
}

impl ReportFormat {
    /// File extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Text => "txt",
            ReportFormat::Csv => "csv",
            ReportFormat::Json => "json",
            ReportFormat::Yaml => "yaml",
        }
    }

    /// Default output file name, e.g. `expense-report.txt`
    pub fn default_file_name(&self) -> String {
        format!("expense-report.{}", self.extension())
    }
}

/// Write a report in the requested format
pub fn write_report<W: Write>(
    report: &ExpenseReport,
    format: ReportFormat,
    currency_symbol: &str,
    writer: &mut W,
) -> ExpenseResult<()> {
    match format {
        ReportFormat::Text => write_text_report(report, currency_symbol, writer),
        ReportFormat::Csv => write_csv_report(report, writer),
        ReportFormat::Json => write_json_report(report, writer, true),
        ReportFormat::Yaml => write_yaml_report(report, writer),
    }
}

//! Report CLI command

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use clap::Args;

use crate::config::Settings;
use crate::error::{ExpenseError, ExpenseResult};
use crate::export::{write_report, ExpenseReport, ReportFormat};
use crate::services::ExpenseStore;
use crate::storage::KeyValueStore;

/// Arguments for `report`
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Report format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReportFormat,

    /// Output file path (defaults to expense-report.<ext> in the current directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Export the filtered expenses as a report file
pub fn handle_report_command<S: KeyValueStore>(
    store: &ExpenseStore<S>,
    settings: &Settings,
    args: ReportArgs,
) -> ExpenseResult<()> {
    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(args.format.default_file_name()));

    let file = File::create(&output).map_err(|e| {
        ExpenseError::Export(format!(
            "Failed to create file {}: {}",
            output.display(),
            e
        ))
    })?;
    let mut writer = BufWriter::new(file);

    let report = ExpenseReport::from_store(store, settings.report_title.clone());
    write_report(&report, args.format, &settings.currency_symbol, &mut writer)?;
    writer
        .flush()
        .map_err(|e| ExpenseError::Export(format!("Failed to flush report: {}", e)))?;

    println!(
        "Exported {} expenses to: {}",
        report.expenses.len(),
        output.display()
    );

    Ok(())
}

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use expense_tracker::audit::AuditLogger;
use expense_tracker::cli::{
    handle_expense_command, handle_history_command, handle_report_command, print_summary,
    ExpenseCommands, ReportArgs,
};
use expense_tracker::config::{paths::DATA_DIR_ENV, ExpensePaths, Settings};
use expense_tracker::services::ExpenseStore;
use expense_tracker::storage::FileStore;

#[derive(Parser)]
#[command(
    name = "expense",
    version,
    about = "Track personal expenses from the command line",
    long_about = "Record expenses, see what you have spent, filter by month, \
                  break spending down by category and export a report."
)]
struct Cli {
    /// Base directory for settings, data and the audit log
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    /// Only consider expenses from this month (YYYY-MM)
    #[arg(short, long, global = true)]
    month: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Expense(ExpenseCommands),

    /// Export the filtered expenses as a report
    Report(ReportArgs),

    /// Show recent adds and deletes
    History {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        limit: usize,
    },

    /// Write the default settings file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = match cli.data_dir {
        Some(dir) => ExpensePaths::with_base_dir(dir),
        None => ExpensePaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;
    init_tracing(&settings);

    paths.ensure_directories()?;
    let audit = AuditLogger::new(paths.audit_log());

    let mut store = ExpenseStore::open(
        FileStore::new(paths.data_dir()),
        settings.storage_key.clone(),
    )?;
    if settings.audit_enabled {
        store = store.with_audit(audit.clone());
    }
    if let Some(month) = cli.month {
        store.set_month_filter(month);
    }

    match cli.command {
        Some(Commands::Expense(cmd)) => handle_expense_command(&mut store, &settings, cmd)?,
        Some(Commands::Report(args)) => handle_report_command(&store, &settings, args)?,
        Some(Commands::History { limit }) => handle_history_command(&audit, limit)?,
        Some(Commands::Init) => {
            settings.save(&paths)?;
            println!("Settings written to: {}", paths.settings_file().display());
        }
        Some(Commands::Config) => {
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Data directory:  {}", paths.data_dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!("Audit log:       {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Storage key:     {}", settings.storage_key);
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Report title:    {}", settings.report_title);
            println!("  Audit enabled:   {}", settings.audit_enabled);
            println!("  Log level:       {}", settings.log_level);
        }
        None => print_summary(&store, &settings),
    }

    Ok(())
}

fn init_tracing(settings: &Settings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.log_level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

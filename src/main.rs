use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::debug;

use pocket_ledger::cli::{
    handle_account_command, handle_category_command, handle_export_command,
    handle_import_command, handle_operation_command, handle_post_command, AccountCommands,
    CategoryCommands, OperationCommands, PostArgs,
};
use pocket_ledger::config::{LedgerPaths, Settings};
use pocket_ledger::display::format_analytics_report;
use pocket_ledger::logging::init_logging;
use pocket_ledger::models::FlowType;
use pocket_ledger::services::{load_demo_data, FinanceFacade, DEFAULT_EXPORT_FILE};
use pocket_ledger::storage::Storage;

#[derive(Parser)]
#[command(
    name = "pocket",
    version,
    about = "Personal bookkeeping from the command line",
    long_about = "pocket keeps bank accounts, income and expense categories and \
                  dated operations, keeps balances up to date, and exports or \
                  imports the whole ledger as JSON."
)]
struct Cli {
    /// Ledger file holding state between runs
    #[arg(long, global = true, env = "POCKET_LEDGER_FILE")]
    ledger: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Account management commands
    #[command(subcommand)]
    Account(AccountCommands),

    /// Category management commands
    #[command(subcommand)]
    Category(CategoryCommands),

    /// Post an income
    Income(PostArgs),

    /// Post an expense
    Expense(PostArgs),

    /// Operation listing
    #[command(subcommand, alias = "op")]
    Operation(OperationCommands),

    /// Show total income, total expense and their difference
    Report,

    /// Export all data to JSON
    Export {
        /// Output file (defaults to export.json in the working directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Replace all data with the contents of a JSON export
    Import {
        /// Path to the export file
        #[arg(default_value = DEFAULT_EXPORT_FILE)]
        path: PathBuf,
    },

    /// Load demonstration data
    Demo,

    /// Show current configuration and paths
    Config {
        /// Write the current settings to the settings file
        #[arg(long)]
        init: bool,
    },
}

impl Commands {
    fn is_mutating(&self) -> bool {
        match self {
            Commands::Account(cmd) => cmd.is_mutating(),
            Commands::Category(cmd) => cmd.is_mutating(),
            Commands::Income(_) | Commands::Expense(_) => true,
            Commands::Import { .. } | Commands::Demo => true,
            _ => false,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = LedgerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let _logger = init_logging(&settings.log_level)?;

    let ledger_file = cli.ledger.unwrap_or_else(|| paths.ledger_file());

    let storage = Storage::new();
    let facade = FinanceFacade::new(&storage);

    if ledger_file.exists() {
        debug!("Loading ledger from {}", ledger_file.display());
        facade.import_from_json(&ledger_file)?;
    }

    let Some(command) = cli.command else {
        println!("pocket - personal bookkeeping");
        println!();
        println!("Run 'pocket --help' for usage information.");
        println!("Run 'pocket demo' to load demonstration data.");
        return Ok(());
    };

    let mutating = command.is_mutating();

    match command {
        Commands::Account(cmd) => handle_account_command(&facade, &settings, cmd)?,
        Commands::Category(cmd) => handle_category_command(&facade, cmd)?,
        Commands::Income(args) => handle_post_command(&facade, &settings, FlowType::Income, args)?,
        Commands::Expense(args) => {
            handle_post_command(&facade, &settings, FlowType::Expense, args)?
        }
        Commands::Operation(cmd) => handle_operation_command(&facade, &settings, cmd)?,
        Commands::Report => {
            let report = facade.analytics_report()?;
            print!("{}", format_analytics_report(&report, &settings.currency_symbol));
        }
        Commands::Export { output } => handle_export_command(&facade, output)?,
        Commands::Import { path } => handle_import_command(&facade, path)?,
        Commands::Demo => {
            load_demo_data(&facade)?;
            println!("Demonstration data loaded.");
        }
        Commands::Config { init } => {
            if init {
                settings.save(&paths)?;
                println!("Settings written to {}", paths.settings_file().display());
                println!();
            }
            println!("pocket-ledger Configuration");
            println!("===========================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Ledger file:    {}", ledger_file.display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Log level:       {}", settings.log_level);
        }
    }

    if mutating {
        facade.export_to(&ledger_file)?;
        debug!("Saved ledger to {}", ledger_file.display());
    }

    Ok(())
}

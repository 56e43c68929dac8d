use anyhow::Result;
use clap::{Parser, Subcommand};

use bank_statements::cli::{
    handle_balance_command, handle_export_command, handle_import_command, BalanceArgs, ExportArgs,
    ImportArgs,
};
use bank_statements::config::{paths::StatementPaths, settings::Settings};
use bank_statements::error::StatementError;
use bank_statements::storage::Storage;

/// Exit status when the input file or arguments were rejected
const EXIT_BAD_REQUEST: i32 = 2;
const EXIT_FAILURE: i32 = 1;

#[derive(Parser)]
#[command(
    name = "bank-statements",
    version,
    about = "Import, export and balance bank statements",
    long_about = "bank-statements ingests bank statement records from CSV files, \
                  keeps the valid ones, exports them again as CSV for a date range \
                  and computes per-currency account balances."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Import bank statements from a CSV file
    Import(ImportArgs),

    /// Export bank statements in a date range to CSV
    Export(ExportArgs),

    /// Show the per-currency balance of an account
    Balance(BalanceArgs),

    /// Show current configuration and paths
    Config,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(exit_code(&e));
    }
}

fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<StatementError>() {
        Some(e) if e.is_bad_request() => EXIT_BAD_REQUEST,
        _ => EXIT_FAILURE,
    }
}

fn run(cli: Cli) -> Result<()> {
    // Initialize paths and settings
    let paths = StatementPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(settings.log_level.as_str()),
    )
    .init();

    // Initialize storage
    let mut storage = Storage::new(&paths)?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Import(args)) => handle_import_command(&storage, args)?,
        Some(Commands::Export(args)) => handle_export_command(&storage, &settings, args)?,
        Some(Commands::Balance(args)) => handle_balance_command(&storage, args)?,
        Some(Commands::Config) => {
            println!("bank-statements Configuration");
            println!("=============================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Statements file:  {}", paths.statements_file().display());
            if storage.is_initialized() {
                println!("Stored statements: {}", storage.statements.count()?);
            } else {
                println!("Stored statements: none yet");
            }
            println!();
            println!("Settings:");
            println!("  Log level:        {}", settings.log_level);
            println!("  Export file name: {}", settings.export_file_name);
        }
        None => {
            println!("bank-statements - CSV bank statement import and balances");
            println!();
            println!("Run 'bank-statements --help' for usage information.");
        }
    }

    Ok(())
}

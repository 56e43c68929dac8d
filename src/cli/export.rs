//! CLI command handler for CSV export

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Args;

use crate::config::Settings;
use crate::error::{StatementError, StatementResult};
use crate::services::ExportService;
use crate::storage::Storage;

/// Arguments of the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// First day to include (YYYY-MM-DD), defaults to 1970-01-01
    #[arg(long)]
    pub from: Option<NaiveDate>,

    /// First day to exclude (YYYY-MM-DD), defaults to today
    #[arg(long)]
    pub to: Option<NaiveDate>,

    /// Output file, or `-` for stdout; defaults to the configured file name
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Handle the export command
pub fn handle_export_command(
    storage: &Storage,
    settings: &Settings,
    args: ExportArgs,
) -> StatementResult<()> {
    let service = ExportService::new(&storage.statements);
    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(&settings.export_file_name));

    if output.as_os_str() == "-" {
        let stdout = io::stdout();
        service.export_to_csv(args.from, args.to, stdout.lock())?;
        return Ok(());
    }

    let file = File::create(&output).map_err(|e| {
        StatementError::CsvExportFailed(format!(
            "Failed to create {}: {}",
            output.display(),
            e
        ))
    })?;
    let count = service.export_to_csv(args.from, args.to, BufWriter::new(file))?;

    println!(
        "Exported {} bank statement(s) to {}",
        count,
        output.display()
    );
    Ok(())
}

//! CLI command handler for CSV import
//!
//! Reads a CSV file of bank statements and saves the valid ones.

use std::path::PathBuf;

use clap::Args;

use crate::codec::Upload;
use crate::display::format_statement_list;
use crate::error::StatementResult;
use crate::services::ImportService;
use crate::storage::Storage;

/// Arguments of the import command
#[derive(Args, Debug)]
pub struct ImportArgs {
    /// Path to the CSV file
    pub file: PathBuf,

    /// Declared media type, guessed from the file extension when omitted
    #[arg(long, value_name = "MIME")]
    pub content_type: Option<String>,

    /// Print the imported statements as JSON
    #[arg(long)]
    pub json: bool,
}

/// Handle the import command
pub fn handle_import_command(storage: &Storage, args: ImportArgs) -> StatementResult<()> {
    let mut upload = Upload::from_path(&args.file)?;
    if let Some(content_type) = args.content_type {
        upload = upload.with_content_type(content_type);
    }

    let imported = ImportService::new(&storage.statements).import_from_csv(Some(&upload))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&imported)?);
        return Ok(());
    }

    if imported.is_empty() {
        println!("No valid bank statements found in {}.", args.file.display());
        return Ok(());
    }

    println!("{}", format_statement_list(&imported));
    println!("Imported {} bank statement(s).", imported.len());

    Ok(())
}

//! CSV import service
//!
//! Reads an uploaded CSV file, keeps the valid bank statements and saves them
//! in one batch.

use log::info;

use crate::codec::{import_schema, read_rows, Upload};
use crate::error::{StatementError, StatementResult};
use crate::models::BankStatement;
use crate::storage::StatementStore;

/// Service for importing bank statements
pub struct ImportService<'a, S: StatementStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: StatementStore + ?Sized> ImportService<'a, S> {
    /// Create a new import service
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Import the valid statements of an upload
    ///
    /// Returns the saved statements, with IDs, in file order. The store is
    /// not called at all when nothing in the file is valid.
    pub fn import_from_csv(&self, upload: Option<&Upload>) -> StatementResult<Vec<BankStatement>> {
        let upload = upload.ok_or_else(StatementError::missing_file)?;

        let rows = read_rows(upload, &import_schema())?;
        let total = rows.len();

        let valid: Vec<BankStatement> = rows
            .into_iter()
            .map(BankStatement::from)
            .filter(|statement| {
                let valid = statement.is_valid();
                if !valid {
                    info!("Skipping invalid bank statement: {}", statement);
                }
                valid
            })
            .collect();

        if valid.is_empty() {
            info!(
                "No valid bank statements in {} ({} rows read)",
                upload.display_name(),
                total
            );
            return Ok(Vec::new());
        }

        let saved = self.store.save_all(valid)?;
        info!(
            "Imported {} of {} bank statements from {}",
            saved.len(),
            total,
            upload.display_name()
        );

        Ok(saved)
    }
}

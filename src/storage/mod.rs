//! Storage layer for bank-statements
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation. Pipelines only see the [`StatementStore`] trait.

pub mod statement_file;
pub mod statements;

pub use statement_file::StatementFile;
pub use statements::StatementRepository;

use crate::config::paths::StatementPaths;
use crate::error::StatementError;
use crate::models::{BankStatement, DateRange};

/// Persistence collaborator for bank statements
///
/// Query results are ordered by operation date, then ID. Ranges are half-open.
pub trait StatementStore {
    /// Persist a batch, returning the saved records with IDs in input order
    fn save_all(
        &self,
        statements: Vec<BankStatement>,
    ) -> Result<Vec<BankStatement>, StatementError>;

    /// Records whose operation date falls in the range
    fn find_by_operation_date_range(
        &self,
        range: &DateRange,
    ) -> Result<Vec<BankStatement>, StatementError>;

    /// Records sent from an account within the range
    fn find_by_account_number_and_range(
        &self,
        account_number: &str,
        range: &DateRange,
    ) -> Result<Vec<BankStatement>, StatementError>;

    /// Records received by an account within the range
    fn find_by_beneficiary_and_range(
        &self,
        beneficiary: &str,
        range: &DateRange,
    ) -> Result<Vec<BankStatement>, StatementError>;
}

/// Main storage coordinator
pub struct Storage {
    pub statements: StatementRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: &StatementPaths) -> Result<Self, StatementError> {
        paths.ensure_directories()?;

        Ok(Self {
            statements: StatementRepository::new(paths.statements_file()),
        })
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), StatementError> {
        self.statements.load()
    }

    /// Check if anything has been stored yet
    pub fn is_initialized(&self) -> bool {
        self.statements.is_persisted()
    }
}

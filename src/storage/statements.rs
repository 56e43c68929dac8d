//! Statement repository for JSON storage
//!
//! Manages loading and saving bank statements to statements.json and hands
//! out sequential IDs on save.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::StatementError;
use crate::models::{BankStatement, DateRange, StatementId};

use super::statement_file::StatementFile;
use super::StatementStore;

/// Repository for statement persistence
pub struct StatementRepository {
    file: StatementFile,
    data: RwLock<BTreeMap<StatementId, BankStatement>>,
}

impl StatementRepository {
    /// Create a new statement repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            file: StatementFile::new(path),
            data: RwLock::new(BTreeMap::new()),
        }
    }

    /// Load statements from disk
    pub fn load(&self) -> Result<(), StatementError> {
        let statements = self.file.read()?;

        let mut data = self.data.write().map_err(|e| {
            StatementError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        *data = statements;

        Ok(())
    }

    /// Save statements to disk
    pub fn save(&self) -> Result<(), StatementError> {
        let data = self.data.read().map_err(|e| {
            StatementError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        self.file.write(data.values())
    }

    /// Check if the backing file has been written
    pub fn is_persisted(&self) -> bool {
        self.file.exists()
    }

    /// Get a statement by ID
    pub fn get(&self, id: StatementId) -> Result<Option<BankStatement>, StatementError> {
        let data = self.data.read().map_err(|e| {
            StatementError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.get(&id).cloned())
    }

    /// Count statements
    pub fn count(&self) -> Result<usize, StatementError> {
        let data = self.data.read().map_err(|e| {
            StatementError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.len())
    }

    /// Statements in range matching a predicate, ordered by operation date then ID
    fn find_in_range<F>(
        &self,
        range: &DateRange,
        predicate: F,
    ) -> Result<Vec<BankStatement>, StatementError>
    where
        F: Fn(&BankStatement) -> bool,
    {
        let data = self.data.read().map_err(|e| {
            StatementError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let mut statements: Vec<_> = data
            .values()
            .filter(|s| s.operation_date.is_some_and(|d| range.contains(d)))
            .filter(|s| predicate(s))
            .cloned()
            .collect();
        statements.sort_by_key(|s| (s.operation_date, s.id));
        Ok(statements)
    }
}

impl StatementStore for StatementRepository {
    fn save_all(
        &self,
        statements: Vec<BankStatement>,
    ) -> Result<Vec<BankStatement>, StatementError> {
        if let Some(invalid) = statements.iter().find(|s| !s.is_valid()) {
            return Err(StatementError::Storage(format!(
                "Refusing to save invalid bank statement: {}",
                invalid
            )));
        }

        let saved = {
            let mut data = self.data.write().map_err(|e| {
                StatementError::Storage(format!("Failed to acquire write lock: {}", e))
            })?;

            let mut next_id = match data.keys().next_back() {
                Some(last) => last.next(),
                None => Some(StatementId::FIRST),
            };

            let mut saved: Vec<BankStatement> = Vec::with_capacity(statements.len());
            for statement in statements {
                let Some(id) = next_id else {
                    for statement in &saved {
                        if let Some(id) = statement.id {
                            data.remove(&id);
                        }
                    }
                    return Err(StatementError::Storage(
                        "No statement IDs left to assign".into(),
                    ));
                };
                let statement = statement.with_id(id);
                data.insert(id, statement.clone());
                saved.push(statement);
                next_id = id.next();
            }
            saved
        };

        if let Err(e) = self.save() {
            // Keep memory consistent with what is on disk
            if let Ok(mut data) = self.data.write() {
                for statement in &saved {
                    if let Some(id) = statement.id {
                        data.remove(&id);
                    }
                }
            }
            return Err(e);
        }

        Ok(saved)
    }

    fn find_by_operation_date_range(
        &self,
        range: &DateRange,
    ) -> Result<Vec<BankStatement>, StatementError> {
        self.find_in_range(range, |_| true)
    }

    fn find_by_account_number_and_range(
        &self,
        account_number: &str,
        range: &DateRange,
    ) -> Result<Vec<BankStatement>, StatementError> {
        self.find_in_range(range, |s| s.account_number == account_number)
    }

    fn find_by_beneficiary_and_range(
        &self,
        beneficiary: &str,
        range: &DateRange,
    ) -> Result<Vec<BankStatement>, StatementError> {
        self.find_in_range(range, |s| s.beneficiary == beneficiary)
    }
}

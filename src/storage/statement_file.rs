//! On-disk format of the statement store
//!
//! `statements.json` holds a format version and every saved statement. A
//! write never leaves a half-written file behind: the new contents are staged
//! next to the file, synced, then renamed over it.

use std::collections::BTreeMap;
use std::fmt::Display;
use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{StatementError, StatementResult};
use crate::models::{BankStatement, StatementId};

/// Version written into new files
pub const FORMAT_VERSION: u32 = 1;

fn default_format_version() -> u32 {
    FORMAT_VERSION
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredStatements {
    #[serde(default = "default_format_version")]
    format_version: u32,
    #[serde(default)]
    statements: Vec<BankStatement>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StatementSnapshot<'a> {
    format_version: u32,
    statements: Vec<&'a BankStatement>,
}

/// The JSON file backing a statement repository
#[derive(Debug, Clone)]
pub struct StatementFile {
    path: PathBuf,
}

impl StatementFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Check if anything was ever written
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Read every stored statement keyed by its ID
    ///
    /// A missing file reads as an empty store. Statements without an ID, or
    /// sharing an ID, make the whole file unreadable.
    pub fn read(&self) -> StatementResult<BTreeMap<StatementId, BankStatement>> {
        if !self.exists() {
            return Ok(BTreeMap::new());
        }

        let bytes = fs::read(&self.path).map_err(|e| self.error("read", e))?;
        let stored: StoredStatements =
            serde_json::from_slice(&bytes).map_err(|e| self.error("parse", e))?;

        if stored.format_version > FORMAT_VERSION {
            return Err(self.error(
                "read",
                format!(
                    "format version {} is newer than supported version {}",
                    stored.format_version, FORMAT_VERSION
                ),
            ));
        }

        let mut by_id = BTreeMap::new();
        for statement in stored.statements {
            let id = statement.id.ok_or_else(|| {
                self.error("read", format!("statement without id: {}", statement))
            })?;
            if by_id.insert(id, statement).is_some() {
                return Err(self.error("read", format!("duplicate statement id {}", id)));
            }
        }

        Ok(by_id)
    }

    /// Replace the file with the given statements
    pub fn write<'a>(
        &self,
        statements: impl IntoIterator<Item = &'a BankStatement>,
    ) -> StatementResult<()> {
        let snapshot = StatementSnapshot {
            format_version: FORMAT_VERSION,
            statements: statements.into_iter().collect(),
        };
        let bytes = serde_json::to_vec_pretty(&snapshot).map_err(|e| self.error("encode", e))?;

        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).map_err(|e| self.error("create directory for", e))?;
        }

        let staging = self.staging_path();
        let staged = File::create(&staging).and_then(|mut file| {
            file.write_all(&bytes)?;
            file.sync_all()
        });
        if let Err(e) = staged.and_then(|_| fs::rename(&staging, &self.path)) {
            let _ = fs::remove_file(&staging);
            return Err(self.error("write", e));
        }

        Ok(())
    }

    fn staging_path(&self) -> PathBuf {
        self.path.with_extension("json.partial")
    }

    fn error(&self, action: &str, cause: impl Display) -> StatementError {
        StatementError::Storage(format!(
            "Failed to {} statements file {}: {}",
            action,
            self.path.display(),
            cause
        ))
    }
}

//! Custom error types for bank-statements
//!
//! This module defines the error hierarchy for the library using thiserror.
//! Per-row CSV parse failures are not errors: the codec drops those rows.

use thiserror::Error;

/// The main error type for bank statement operations
#[derive(Error, Debug)]
pub enum StatementError {
    /// A required input was not supplied (no file, empty schema)
    #[error("Precondition failed: {0}")]
    PreconditionFailed(String),

    /// The upload is not declared as `text/csv`
    #[error("Failed to import csv because file is not of csv type{}", content_type_suffix(.0))]
    InvalidContentType(Option<String>),

    /// The CSV stream has no header line at all
    #[error("Failed to import csv because header is missing")]
    MissingHeader,

    /// The header names a column the row schema does not know
    #[error("Failed to import csv because header is invalid: unknown column '{0}'")]
    InvalidHeader(String),

    /// Reading the CSV stream failed below the row level
    #[error("Failed to read csv: {0}")]
    CsvReadFailed(String),

    /// Writing the CSV export failed
    #[error("Csv export failed: {0}")]
    CsvExportFailed(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// A per-currency total left the representable decimal range
    #[error("Balance in {currency} is too large to represent")]
    BalanceOverflow { currency: String },
}

fn content_type_suffix(content_type: &Option<String>) -> String {
    match content_type {
        Some(ct) => format!(" (declared '{}')", ct),
        None => String::new(),
    }
}

impl StatementError {
    /// Create a precondition error for a missing upload
    pub fn missing_file() -> Self {
        Self::PreconditionFailed("File cannot be null".into())
    }

    /// Create a precondition error for a schema without fields
    pub fn empty_schema() -> Self {
        Self::PreconditionFailed("Schema cannot be empty".into())
    }

    /// Check if this error was caused by the caller's input
    ///
    /// These are the errors an HTTP boundary would report as 400 Bad Request.
    pub fn is_bad_request(&self) -> bool {
        matches!(
            self,
            Self::PreconditionFailed(_)
                | Self::InvalidContentType(_)
                | Self::MissingHeader
                | Self::InvalidHeader(_)
                | Self::CsvReadFailed(_)
                | Self::CsvExportFailed(_)
        )
    }

    /// Check if this is a storage error
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage(_))
    }
}

impl From<std::io::Error> for StatementError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for StatementError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for bank statement operations
pub type StatementResult<T> = Result<T, StatementError>;

//! CSV codec for bank-statements
//!
//! Bidirectional mapping between CSV text and typed rows:
//!
//! - `schema`: declared row schemas (field name, parser, formatter)
//! - `reader`: header validation and row-tolerant reading
//! - `writer`: header plus row writing, nothing for an empty set
//! - `rows`: the import and export rows of bank statements

pub mod reader;
pub mod rows;
pub mod schema;
pub mod writer;

use std::path::Path;

use crate::error::{StatementError, StatementResult};

pub use reader::{read_rows, read_rows_from};
pub use rows::{export_schema, import_schema, ExportRow, ImportRow};
pub use schema::{Field, FieldError, RowError, RowSchema};
pub use writer::write_rows;

/// The only media type accepted for uploads
pub const CSV_CONTENT_TYPE: &str = "text/csv";

/// Media type assumed for uploads that are not recognizably CSV
pub const OCTET_STREAM_CONTENT_TYPE: &str = "application/octet-stream";

/// An uploaded file: raw bytes plus what the sender declared about them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upload {
    /// Original file name, if known
    pub file_name: Option<String>,
    /// Declared media type
    pub content_type: Option<String>,
    /// File contents
    pub bytes: Vec<u8>,
}

impl Upload {
    /// Create an upload from bytes and a declared media type
    pub fn new(bytes: impl Into<Vec<u8>>, content_type: Option<impl Into<String>>) -> Self {
        Self {
            file_name: None,
            content_type: content_type.map(Into::into),
            bytes: bytes.into(),
        }
    }

    /// Create an upload declared as `text/csv`
    pub fn csv(bytes: impl Into<Vec<u8>>) -> Self {
        Self::new(bytes, Some(CSV_CONTENT_TYPE))
    }

    /// Read an upload from disk, declaring its type from the file extension
    pub fn from_path(path: &Path) -> StatementResult<Self> {
        let bytes = std::fs::read(path).map_err(|e| {
            StatementError::CsvReadFailed(format!("Failed to read {}: {}", path.display(), e))
        })?;

        Ok(Self {
            file_name: path.file_name().map(|n| n.to_string_lossy().into_owned()),
            content_type: Some(content_type_for(path).to_string()),
            bytes,
        })
    }

    /// Override the declared media type
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Check if the upload is declared as CSV
    pub fn is_csv(&self) -> bool {
        self.content_type.as_deref() == Some(CSV_CONTENT_TYPE)
    }

    /// Name used in log messages
    pub fn display_name(&self) -> &str {
        self.file_name.as_deref().unwrap_or("upload")
    }
}

/// Media type a file path suggests
pub fn content_type_for(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("csv") => CSV_CONTENT_TYPE,
        _ => OCTET_STREAM_CONTENT_TYPE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_content_type_for() {
        for csv in ["statements.csv", "STATEMENTS.CSV"] {
            assert_eq!(content_type_for(Path::new(csv)), CSV_CONTENT_TYPE);
        }
        for other in ["statements.txt", "statements"] {
            assert_eq!(content_type_for(Path::new(other)), OCTET_STREAM_CONTENT_TYPE);
        }
    }

    #[test]
    fn test_upload_from_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("march.csv");
        std::fs::write(&path, "accountNumber\n").unwrap();

        let upload = Upload::from_path(&path).unwrap();
        assert_eq!(upload.file_name.as_deref(), Some("march.csv"));
        assert!(upload.is_csv());
        assert_eq!(upload.bytes, b"accountNumber\n");
    }

    #[test]
    fn test_upload_from_missing_path() {
        let temp_dir = TempDir::new().unwrap();
        let result = Upload::from_path(&temp_dir.path().join("missing.csv"));
        assert!(matches!(result, Err(StatementError::CsvReadFailed(_))));
    }

    #[test]
    fn test_content_type_override() {
        let upload =
            Upload::new(Vec::new(), Some("text/plain")).with_content_type(CSV_CONTENT_TYPE);
        assert!(upload.is_csv());
        assert_eq!(upload.display_name(), "upload");
    }
}

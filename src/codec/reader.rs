//! CSV reader
//!
//! Maps CSV text to typed rows through a [`RowSchema`]. Structural problems
//! (wrong content type, missing or unknown header) fail the whole read; a row
//! that fails to convert is dropped and the read carries on.

use std::io::Read;

use csv::{ReaderBuilder, StringRecord};
use log::{debug, error};

use crate::error::{StatementError, StatementResult};

use super::schema::{FieldError, RowError, RowSchema};
use super::Upload;

/// Read typed rows from an upload
///
/// The upload must be declared as `text/csv`.
pub fn read_rows<T: Default>(upload: &Upload, schema: &RowSchema<T>) -> StatementResult<Vec<T>> {
    if schema.is_empty() {
        return Err(StatementError::empty_schema());
    }
    if !upload.is_csv() {
        return Err(StatementError::InvalidContentType(
            upload.content_type.clone(),
        ));
    }
    read_rows_from(upload.bytes.as_slice(), schema).map_err(|e| {
        if let StatementError::CsvReadFailed(_) = e {
            error!("Failed to read rows from {}: {}", upload.display_name(), e);
        }
        e
    })
}

/// Read typed rows from any CSV source
pub fn read_rows_from<R: Read, T: Default>(
    source: R,
    schema: &RowSchema<T>,
) -> StatementResult<Vec<T>> {
    if schema.is_empty() {
        return Err(StatementError::empty_schema());
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(source);
    let mut records = reader.records();

    let header = match records.next() {
        None => return Err(StatementError::MissingHeader),
        Some(Err(e)) => return Err(StatementError::CsvReadFailed(e.to_string())),
        Some(Ok(header)) => header,
    };
    let columns = map_header(&header, schema)?;

    let mut rows = Vec::new();
    for result in records {
        let record = match result {
            Ok(record) => record,
            Err(e) if matches!(e.kind(), csv::ErrorKind::Io(_)) => {
                return Err(StatementError::CsvReadFailed(e.to_string()));
            }
            Err(e) => {
                debug!("Dropping unreadable csv record: {}", e);
                continue;
            }
        };

        if is_blank(&record) {
            continue;
        }

        match parse_row(&record, &columns, schema) {
            Ok(row) => rows.push(row),
            Err(e) => debug!("Dropping csv row at line {}: {}", line_of(&record), e),
        }
    }

    Ok(rows)
}

/// Resolve every header token to a schema field index
fn map_header<T>(header: &StringRecord, schema: &RowSchema<T>) -> StatementResult<Vec<usize>> {
    header
        .iter()
        .enumerate()
        .map(|(i, token)| {
            // A UTF-8 byte order mark sticks to the first token
            let token = if i == 0 {
                token.trim_start_matches('\u{feff}')
            } else {
                token
            };
            schema
                .position(token)
                .ok_or_else(|| StatementError::InvalidHeader(token.trim().to_string()))
        })
        .collect()
}

fn parse_row<T: Default>(
    record: &StringRecord,
    columns: &[usize],
    schema: &RowSchema<T>,
) -> Result<T, RowError> {
    let mut row = T::default();
    let mut provided = vec![false; schema.len()];

    // Cells past the header width have no column and are ignored
    for (column, &field_index) in columns.iter().enumerate() {
        let value = record.get(column).unwrap_or("");
        if value.is_empty() {
            continue;
        }
        schema.fields()[field_index].parse(&mut row, value)?;
        provided[field_index] = true;
    }

    for (field, provided) in schema.fields().iter().zip(provided) {
        if field.is_required() && !provided {
            return Err(RowError {
                field: field.name(),
                source: FieldError::Missing,
            });
        }
    }

    Ok(row)
}

fn is_blank(record: &StringRecord) -> bool {
    record.iter().all(|cell| cell.trim().is_empty()) && record.len() <= 1
}

fn line_of(record: &StringRecord) -> u64 {
    record.position().map(|p| p.line()).unwrap_or_default()
}

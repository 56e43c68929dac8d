//! CSV writer
//!
//! Writes typed rows through a [`RowSchema`]: an upper-cased header followed by
//! one line per row. Nothing at all is written for an empty row set.

use std::io::Write;

use csv::WriterBuilder;
use log::warn;

use crate::error::{StatementError, StatementResult};

use super::schema::{RowError, RowSchema};

/// Write rows to a sink, returning how many data rows were written
///
/// Rows that fail to render are skipped.
pub fn write_rows<T, W: Write>(
    rows: &[T],
    schema: &RowSchema<T>,
    sink: W,
) -> StatementResult<usize> {
    if schema.is_empty() {
        return Err(StatementError::empty_schema());
    }
    if rows.is_empty() {
        return Ok(0);
    }

    let mut writer = WriterBuilder::new().from_writer(sink);
    writer
        .write_record(schema.headers())
        .map_err(|e| StatementError::CsvExportFailed(e.to_string()))?;

    let mut written = 0;
    for (index, row) in rows.iter().enumerate() {
        match render_row(row, schema) {
            Ok(cells) => {
                writer
                    .write_record(&cells)
                    .map_err(|e| StatementError::CsvExportFailed(e.to_string()))?;
                written += 1;
            }
            Err(e) => warn!("Skipping row {} of csv export: {}", index + 1, e),
        }
    }

    writer
        .flush()
        .map_err(|e| StatementError::CsvExportFailed(e.to_string()))?;

    Ok(written)
}

fn render_row<T>(row: &T, schema: &RowSchema<T>) -> Result<Vec<String>, RowError> {
    schema.fields().iter().map(|field| field.format(row)).collect()
}

//! CSV export service
//!
//! Writes the statements of a date range as CSV.

use std::io::Write;

use chrono::NaiveDate;
use log::info;

use crate::codec::{export_schema, write_rows, ExportRow};
use crate::error::StatementResult;
use crate::models::DateRange;
use crate::storage::StatementStore;

/// Service for exporting bank statements
pub struct ExportService<'a, S: StatementStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: StatementStore + ?Sized> ExportService<'a, S> {
    /// Create a new export service
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Export statements dated in `[from, to)` to a sink
    ///
    /// A missing `from` means the epoch, a missing `to` means today. Returns
    /// the number of statements written; nothing is written when there are
    /// none.
    pub fn export_to_csv<W: Write>(
        &self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
        sink: W,
    ) -> StatementResult<usize> {
        self.export_range(&DateRange::resolve(from, to), sink)
    }

    /// Export statements in an already resolved range
    pub fn export_range<W: Write>(&self, range: &DateRange, sink: W) -> StatementResult<usize> {
        let statements = self.store.find_by_operation_date_range(range)?;
        let rows: Vec<ExportRow> = statements.iter().map(ExportRow::from).collect();

        let written = write_rows(&rows, &export_schema(), sink)?;
        info!("Exported {} bank statements in {}", written, range);

        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StatementError;
    use crate::models::date_range::start_of_day;
    use crate::services::test_support::{statement, RecordingStore};

    fn september() -> DateRange {
        DateRange::new(
            start_of_day(NaiveDate::from_ymd_opt(2022, 9, 1).unwrap()),
            start_of_day(NaiveDate::from_ymd_opt(2022, 10, 1).unwrap()),
        )
    }

    fn export(store: &RecordingStore, range: &DateRange) -> (usize, String) {
        let mut output = Vec::new();
        let written = ExportService::new(store).export_range(range, &mut output).unwrap();
        (written, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_no_statements_writes_nothing() {
        let store = RecordingStore::default();
        let (written, csv) = export(&store, &september());

        assert_eq!(written, 0);
        assert!(csv.is_empty());
    }

    #[test]
    fn test_statements_written_with_header() {
        let store = RecordingStore::with(vec![
            statement("account1", "account2", 19, 500, "EUR"),
            statement("account3", "account1", 20, -7, "USD"),
            statement("account2", "account3", 21, 42, "EUR").with_comment("gift"),
        ]);
        let (written, csv) = export(&store, &september());
        let lines: Vec<_> = csv.lines().collect();

        assert_eq!(written, 3);
        assert_eq!(lines.len(), 4);
        assert_eq!(
            lines[0],
            "ID,ACCOUNTNUMBER,OPERATIONDATE,BENEFICIARY,COMMENT,AMOUNT,CURRENCY"
        );
        assert_eq!(lines[1], "1,account1,2022-09-19T20:55:41,account2,,500,EUR");
        assert_eq!(lines[2], "2,account3,2022-09-20T20:55:41,account1,,-7,USD");
        assert_eq!(
            lines[3],
            "3,account2,2022-09-21T20:55:41,account3,gift,42,EUR"
        );
    }

    #[test]
    fn test_only_statements_in_range_are_exported() {
        let store = RecordingStore::with(vec![
            statement("account1", "account2", 19, 500, "EUR"),
            statement("account1", "account2", 25, 600, "EUR"),
        ]);
        let range = DateRange::new(
            start_of_day(NaiveDate::from_ymd_opt(2022, 9, 20).unwrap()),
            start_of_day(NaiveDate::from_ymd_opt(2022, 9, 25).unwrap()),
        );

        let (written, csv) = export(&store, &range);
        assert_eq!(written, 0);
        assert!(csv.is_empty());
    }

    #[test]
    fn test_export_to_csv_defaults_cover_everything_before_today() {
        let store = RecordingStore::with(vec![statement("account1", "account2", 19, 500, "EUR")]);
        let mut output = Vec::new();

        let written = ExportService::new(&store)
            .export_to_csv(None, None, &mut output)
            .unwrap();

        assert_eq!(written, 1);
        assert_eq!(String::from_utf8(output).unwrap().lines().count(), 2);
    }

    #[test]
    fn test_broken_sink_is_export_failure() {
        struct BrokenPipe;

        impl Write for BrokenPipe {
            fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
                Err(std::io::ErrorKind::BrokenPipe.into())
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Err(std::io::ErrorKind::BrokenPipe.into())
            }
        }

        let store = RecordingStore::with(vec![statement("account1", "account2", 19, 500, "EUR")]);
        let result = ExportService::new(&store).export_range(&september(), BrokenPipe);

        assert!(matches!(result, Err(StatementError::CsvExportFailed(_))));
    }
}

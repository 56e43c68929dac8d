//! Bank statement CSV rows
//!
//! The import row is what users upload, the export row is what the export
//! command produces. Both are declared here together with their schemas.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use crate::models::{BankStatement, StatementId};

use super::schema::{
    format_date_time, format_decimal, parse_date_time, parse_decimal, require, Field, FieldError,
    RowSchema,
};

/// One uploaded CSV line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportRow {
    pub account_number: String,
    pub operation_date: Option<NaiveDateTime>,
    pub beneficiary: String,
    pub comment: Option<String>,
    pub amount: Option<Decimal>,
    pub currency: String,
}

impl From<ImportRow> for BankStatement {
    fn from(row: ImportRow) -> Self {
        Self {
            id: None,
            account_number: row.account_number,
            operation_date: row.operation_date,
            beneficiary: row.beneficiary,
            comment: row.comment,
            amount: row.amount,
            currency: row.currency,
        }
    }
}

/// One exported CSV line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportRow {
    pub id: Option<StatementId>,
    pub account_number: String,
    pub operation_date: Option<NaiveDateTime>,
    pub beneficiary: String,
    pub comment: Option<String>,
    pub amount: Option<Decimal>,
    pub currency: String,
}

impl From<&BankStatement> for ExportRow {
    fn from(statement: &BankStatement) -> Self {
        Self {
            id: statement.id,
            account_number: statement.account_number.clone(),
            operation_date: statement.operation_date,
            beneficiary: statement.beneficiary.clone(),
            comment: statement.comment.clone(),
            amount: statement.amount,
            currency: statement.currency.clone(),
        }
    }
}

/// Schema of uploaded statements; only `comment` is optional
pub fn import_schema() -> RowSchema<ImportRow> {
    RowSchema::new(vec![
        Field::required(
            "accountNumber",
            |row: &mut ImportRow, value| {
                row.account_number = value.to_string();
                Ok(())
            },
            |row: &ImportRow| Ok(row.account_number.clone()),
        ),
        Field::required(
            "operationDate",
            |row: &mut ImportRow, value| {
                row.operation_date = Some(parse_date_time(value)?);
                Ok(())
            },
            |row: &ImportRow| require(row.operation_date.as_ref(), format_date_time),
        ),
        Field::required(
            "beneficiary",
            |row: &mut ImportRow, value| {
                row.beneficiary = value.to_string();
                Ok(())
            },
            |row: &ImportRow| Ok(row.beneficiary.clone()),
        ),
        Field::optional(
            "comment",
            |row: &mut ImportRow, value| {
                row.comment = Some(value.to_string());
                Ok(())
            },
            |row: &ImportRow| Ok(row.comment.clone().unwrap_or_default()),
        ),
        Field::required(
            "amount",
            |row: &mut ImportRow, value| {
                row.amount = Some(parse_decimal(value)?);
                Ok(())
            },
            |row: &ImportRow| require(row.amount.as_ref(), format_decimal),
        ),
        Field::required(
            "currency",
            |row: &mut ImportRow, value| {
                row.currency = value.to_string();
                Ok(())
            },
            |row: &ImportRow| Ok(row.currency.clone()),
        ),
    ])
}

/// Schema of exported statements, headed `ID,ACCOUNTNUMBER,...,CURRENCY`
pub fn export_schema() -> RowSchema<ExportRow> {
    RowSchema::new(vec![
        Field::required(
            "id",
            |row: &mut ExportRow, value| {
                let id = value
                    .parse::<StatementId>()
                    .map_err(|_| FieldError::InvalidNumber(value.to_string()))?;
                row.id = Some(id);
                Ok(())
            },
            |row: &ExportRow| require(row.id.as_ref(), StatementId::to_string),
        ),
        Field::required(
            "accountNumber",
            |row: &mut ExportRow, value| {
                row.account_number = value.to_string();
                Ok(())
            },
            |row: &ExportRow| Ok(row.account_number.clone()),
        ),
        Field::required(
            "operationDate",
            |row: &mut ExportRow, value| {
                row.operation_date = Some(parse_date_time(value)?);
                Ok(())
            },
            |row: &ExportRow| require(row.operation_date.as_ref(), format_date_time),
        ),
        Field::required(
            "beneficiary",
            |row: &mut ExportRow, value| {
                row.beneficiary = value.to_string();
                Ok(())
            },
            |row: &ExportRow| Ok(row.beneficiary.clone()),
        ),
        Field::optional(
            "comment",
            |row: &mut ExportRow, value| {
                row.comment = Some(value.to_string());
                Ok(())
            },
            |row: &ExportRow| Ok(row.comment.clone().unwrap_or_default()),
        ),
        Field::required(
            "amount",
            |row: &mut ExportRow, value| {
                row.amount = Some(parse_decimal(value)?);
                Ok(())
            },
            |row: &ExportRow| require(row.amount.as_ref(), format_decimal),
        ),
        Field::required(
            "currency",
            |row: &mut ExportRow, value| {
                row.currency = value.to_string();
                Ok(())
            },
            |row: &ExportRow| Ok(row.currency.clone()),
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{read_rows_from, write_rows};
    use chrono::NaiveDate;

    #[test]
    fn test_import_schema_field_order() {
        let names: Vec<_> = import_schema().fields().iter().map(|f| f.name()).collect();
        assert_eq!(
            names,
            vec![
                "accountNumber",
                "operationDate",
                "beneficiary",
                "comment",
                "amount",
                "currency",
            ]
        );

        let optional: Vec<_> = import_schema()
            .fields()
            .iter()
            .filter(|f| !f.is_required())
            .map(|f| f.name())
            .collect();
        assert_eq!(optional, vec!["comment"]);
    }

    #[test]
    fn test_import_row_to_statement() {
        let row = ImportRow {
            account_number: "account1".into(),
            operation_date: NaiveDate::from_ymd_opt(2022, 9, 19)
                .unwrap()
                .and_hms_opt(20, 55, 41),
            beneficiary: "account2".into(),
            comment: Some("comment".into()),
            amount: Some(Decimal::new(500, 0)),
            currency: "EUR".into(),
        };
        let statement = BankStatement::from(row);

        assert_eq!(statement.id, None);
        assert_eq!(statement.account_number, "account1");
        assert_eq!(statement.comment.as_deref(), Some("comment"));
        assert!(statement.is_valid());
    }

    #[test]
    fn test_export_row_from_statement_keeps_id() {
        let date = NaiveDate::from_ymd_opt(2022, 9, 19)
            .unwrap()
            .and_hms_opt(20, 55, 41)
            .unwrap();
        let statement = BankStatement::new("account1", date, "account2", Decimal::new(5, 0), "EUR")
            .with_id(StatementId::from_raw(9));
        let row = ExportRow::from(&statement);

        assert_eq!(row.id, Some(StatementId::from_raw(9)));
        assert_eq!(row.operation_date, Some(date));
        assert_eq!(row.currency, "EUR");
    }

    #[test]
    fn test_export_output_reads_back() {
        let date = NaiveDate::from_ymd_opt(2022, 9, 19)
            .unwrap()
            .and_hms_opt(20, 55, 41)
            .unwrap();
        let amount = Decimal::new(-125, 1);
        let statement = BankStatement::new("account1", date, "account2", amount, "EUR")
            .with_id(StatementId::from_raw(4))
            .with_comment("refund");
        let rows = vec![ExportRow::from(&statement)];

        let mut output = Vec::new();
        write_rows(&rows, &export_schema(), &mut output).unwrap();
        let parsed = read_rows_from(output.as_slice(), &export_schema()).unwrap();

        assert_eq!(parsed, rows);
    }
}

//! Declared row schemas
//!
//! A [`RowSchema`] is the ordered list of named fields a CSV reader or writer
//! works with. Each field carries its own parser and formatter, so the codec
//! never needs to know the concrete row type.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use std::str::FromStr;
use thiserror::Error;

/// Format used for operation dates in both directions
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Why a single cell could not be converted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// A required value is empty or its column is absent
    #[error("required value is missing")]
    Missing,

    #[error("invalid date '{0}', expected yyyy-MM-ddTHH:mm:ss")]
    InvalidDate(String),

    #[error("invalid amount '{0}'")]
    InvalidAmount(String),

    #[error("invalid number '{0}'")]
    InvalidNumber(String),
}

/// A cell conversion failure tied to the field it happened in
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("field '{field}': {source}")]
pub struct RowError {
    pub field: &'static str,
    #[source]
    pub source: FieldError,
}

/// Writes a parsed cell value into the row
pub type ParseFn<T> = fn(&mut T, &str) -> Result<(), FieldError>;

/// Renders a row's field as a cell
pub type FormatFn<T> = fn(&T) -> Result<String, FieldError>;

/// One named column of a row schema
pub struct Field<T> {
    name: &'static str,
    required: bool,
    parse: ParseFn<T>,
    format: FormatFn<T>,
}

impl<T> Field<T> {
    /// A field every row must provide
    pub fn required(name: &'static str, parse: ParseFn<T>, format: FormatFn<T>) -> Self {
        Self {
            name,
            required: true,
            parse,
            format,
        }
    }

    /// A field rows may leave empty or omit
    pub fn optional(name: &'static str, parse: ParseFn<T>, format: FormatFn<T>) -> Self {
        Self {
            name,
            required: false,
            parse,
            format,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Header cell written for this field
    pub fn header(&self) -> String {
        self.name.to_uppercase()
    }

    /// Check if a header token names this field (case-insensitive)
    pub fn matches(&self, token: &str) -> bool {
        self.name.eq_ignore_ascii_case(token.trim())
    }

    /// Parse a cell into the row
    pub fn parse(&self, row: &mut T, value: &str) -> Result<(), RowError> {
        (self.parse)(row, value).map_err(|source| RowError {
            field: self.name,
            source,
        })
    }

    /// Render the row's value for this field
    pub fn format(&self, row: &T) -> Result<String, RowError> {
        (self.format)(row).map_err(|source| RowError {
            field: self.name,
            source,
        })
    }
}

/// Ordered set of fields describing one kind of CSV row
pub struct RowSchema<T> {
    fields: Vec<Field<T>>,
}

impl<T> RowSchema<T> {
    pub fn new(fields: Vec<Field<T>>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &[Field<T>] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Index of the field a header token refers to
    pub fn position(&self, token: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.matches(token))
    }

    /// Header cells in schema order
    pub fn headers(&self) -> Vec<String> {
        self.fields.iter().map(Field::header).collect()
    }
}

/// Parse an operation date (`yyyy-MM-ddTHH:mm:ss`)
pub fn parse_date_time(value: &str) -> Result<NaiveDateTime, FieldError> {
    NaiveDateTime::parse_from_str(value.trim(), DATE_TIME_FORMAT)
        .map_err(|_| FieldError::InvalidDate(value.to_string()))
}

pub fn format_date_time(value: &NaiveDateTime) -> String {
    value.format(DATE_TIME_FORMAT).to_string()
}

/// Parse a decimal amount, plain or in scientific notation
pub fn parse_decimal(value: &str) -> Result<Decimal, FieldError> {
    let trimmed = value.trim();
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| FieldError::InvalidAmount(value.to_string()))
}

/// Render a decimal with a `.` separator and no grouping
pub fn format_decimal(value: &Decimal) -> String {
    value.normalize().to_string()
}

/// Render an optional value that the row must have
pub fn require<V>(value: Option<&V>, render: impl Fn(&V) -> String) -> Result<String, FieldError> {
    value.map(render).ok_or(FieldError::Missing)
}

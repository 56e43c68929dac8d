//! Bank statement model
//!
//! A single bank statement line: money moving from `account_number` to
//! `beneficiary`. A positive amount is credited to the beneficiary and debited
//! from the account number.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::StatementId;

/// A bank statement record
///
/// Fields are optional or possibly blank because records are first built from
/// untrusted CSV rows. Only records passing [`BankStatement::is_valid`] are
/// ever persisted.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankStatement {
    /// Surrogate ID, assigned by the store on save
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<StatementId>,

    /// Origin account of the transaction
    pub account_number: String,

    /// When the operation happened (second precision)
    pub operation_date: Option<NaiveDateTime>,

    /// Counterparty account
    pub beneficiary: String,

    /// Free text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,

    /// Signed amount, positive means credited to the beneficiary
    pub amount: Option<Decimal>,

    /// Currency code, e.g. EUR
    pub currency: String,
}

impl BankStatement {
    /// Create a statement with every required field set
    pub fn new(
        account_number: impl Into<String>,
        operation_date: NaiveDateTime,
        beneficiary: impl Into<String>,
        amount: Decimal,
        currency: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            account_number: account_number.into(),
            operation_date: Some(operation_date),
            beneficiary: beneficiary.into(),
            comment: None,
            amount: Some(amount),
            currency: currency.into(),
        }
    }

    /// Set the comment
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Set the ID
    pub fn with_id(mut self, id: StatementId) -> Self {
        self.id = Some(id);
        self
    }

    /// Check that every required field is present and non-blank
    pub fn is_valid(&self) -> bool {
        !self.account_number.trim().is_empty()
            && !self.beneficiary.trim().is_empty()
            && !self.currency.trim().is_empty()
            && self.amount.is_some()
            && self.operation_date.is_some()
    }

    /// Copy of this statement with the amount sign flipped
    ///
    /// Used to express a sent transaction as a debit of the sender.
    pub fn negated(&self) -> Self {
        Self {
            amount: self.amount.map(|amount| -amount),
            ..self.clone()
        }
    }
}

impl fmt::Display for BankStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let date = self
            .operation_date
            .map(|d| d.format("%Y-%m-%dT%H:%M:%S").to_string())
            .unwrap_or_else(|| "-".to_string());
        let amount = self
            .amount
            .map(|a| a.to_string())
            .unwrap_or_else(|| "-".to_string());
        write!(
            f,
            "{} {} -> {} {} {}",
            date, self.account_number, self.beneficiary, amount, self.currency
        )
    }
}

//! Balance service
//!
//! Computes the net per-currency balance of an account: what it received
//! minus what it sent within a date range. Currencies are never converted.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use log::debug;
use rust_decimal::Decimal;

use crate::error::{StatementError, StatementResult};
use crate::models::{AccountBalance, BankStatement, DateRange};
use crate::storage::StatementStore;

/// Service for account balances
pub struct BalanceService<'a, S: StatementStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: StatementStore + ?Sized> BalanceService<'a, S> {
    /// Create a new balance service
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Balances of an account in `[from, to)`, one per currency seen
    pub fn get_account_balances(
        &self,
        account_number: &str,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> StatementResult<Vec<AccountBalance>> {
        self.balances_in_range(account_number, &DateRange::resolve(from, to))
    }

    /// Balances of an account in an already resolved range, ordered by currency
    pub fn balances_in_range(
        &self,
        account_number: &str,
        range: &DateRange,
    ) -> StatementResult<Vec<AccountBalance>> {
        let sent = self
            .store
            .find_by_account_number_and_range(account_number, range)?;
        let received = self
            .store
            .find_by_beneficiary_and_range(account_number, range)?;
        debug!(
            "Balancing {}: {} sent, {} received in {}",
            account_number,
            sent.len(),
            received.len(),
            range
        );

        let signed = sent.iter().map(BankStatement::negated).chain(received);

        sum_by_currency(signed)
    }
}

/// Sum amounts per currency; statements without an amount are ignored
fn sum_by_currency(
    statements: impl IntoIterator<Item = BankStatement>,
) -> StatementResult<Vec<AccountBalance>> {
    let mut totals: BTreeMap<String, Decimal> = BTreeMap::new();
    for statement in statements {
        let Some(amount) = statement.amount else {
            continue;
        };
        let total = totals.entry(statement.currency.clone()).or_default();
        *total = total
            .checked_add(amount)
            .ok_or(StatementError::BalanceOverflow {
                currency: statement.currency,
            })?;
    }

    Ok(totals
        .into_iter()
        .map(|(currency, amount)| AccountBalance::new(currency, amount))
        .collect())
}

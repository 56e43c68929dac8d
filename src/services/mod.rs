//! Service layer for bank-statements
//!
//! The service layer provides the import, export and balance pipelines on top
//! of any [`StatementStore`](crate::storage::StatementStore).

pub mod balance;
pub mod export;
pub mod import;

pub use balance::BalanceService;
pub use export::ExportService;
pub use import::ImportService;

#[cfg(test)]
pub(crate) mod test_support {
    use std::cell::{Cell, RefCell};

    use chrono::{NaiveDate, NaiveDateTime};
    use rust_decimal::Decimal;

    use crate::error::{StatementError, StatementResult};
    use crate::models::{BankStatement, DateRange, StatementId};
    use crate::storage::StatementStore;

    /// In-memory store that records how often it was asked to save
    #[derive(Default)]
    pub struct RecordingStore {
        statements: RefCell<Vec<BankStatement>>,
        save_calls: Cell<usize>,
        fail_saves: bool,
    }

    impl RecordingStore {
        pub fn with(statements: Vec<BankStatement>) -> Self {
            let store = Self::default();
            store.save_all(statements).unwrap();
            store.save_calls.set(0);
            store
        }

        pub fn failing() -> Self {
            Self {
                fail_saves: true,
                ..Self::default()
            }
        }

        pub fn save_calls(&self) -> usize {
            self.save_calls.get()
        }

        pub fn stored(&self) -> Vec<BankStatement> {
            self.statements.borrow().clone()
        }

        fn query<F>(&self, range: &DateRange, predicate: F) -> Vec<BankStatement>
        where
            F: Fn(&BankStatement) -> bool,
        {
            let mut found: Vec<_> = self
                .statements
                .borrow()
                .iter()
                .filter(|s| s.operation_date.is_some_and(|d| range.contains(d)))
                .filter(|s| predicate(s))
                .cloned()
                .collect();
            found.sort_by_key(|s| (s.operation_date, s.id));
            found
        }
    }

    impl StatementStore for RecordingStore {
        fn save_all(&self, statements: Vec<BankStatement>) -> StatementResult<Vec<BankStatement>> {
            self.save_calls.set(self.save_calls.get() + 1);
            if self.fail_saves {
                return Err(StatementError::Storage("disk full".into()));
            }

            let mut stored = self.statements.borrow_mut();
            let saved: Vec<_> = statements
                .into_iter()
                .enumerate()
                .map(|(offset, s)| {
                    s.with_id(StatementId::from_raw((stored.len() + offset + 1) as u64))
                })
                .collect();
            stored.extend(saved.iter().cloned());
            Ok(saved)
        }

        fn find_by_operation_date_range(
            &self,
            range: &DateRange,
        ) -> StatementResult<Vec<BankStatement>> {
            Ok(self.query(range, |_| true))
        }

        fn find_by_account_number_and_range(
            &self,
            account_number: &str,
            range: &DateRange,
        ) -> StatementResult<Vec<BankStatement>> {
            Ok(self.query(range, |s| s.account_number == account_number))
        }

        fn find_by_beneficiary_and_range(
            &self,
            beneficiary: &str,
            range: &DateRange,
        ) -> StatementResult<Vec<BankStatement>> {
            Ok(self.query(range, |s| s.beneficiary == beneficiary))
        }
    }

    pub fn at(day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2022, 9, day)
            .unwrap()
            .and_hms_opt(20, 55, 41)
            .unwrap()
    }

    pub fn statement(from: &str, to: &str, day: u32, amount: i64, currency: &str) -> BankStatement {
        BankStatement::new(from, at(day), to, Decimal::new(amount, 0), currency)
    }
}

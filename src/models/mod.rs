//! Core data models for bank-statements
//!
//! This module contains the data structures of the banking domain: statements,
//! per-currency balances and the date ranges queries run over.

pub mod balance;
pub mod date_range;
pub mod ids;
pub mod statement;

pub use balance::AccountBalance;
pub use date_range::DateRange;
pub use ids::StatementId;
pub use statement::BankStatement;

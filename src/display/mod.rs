//! Display formatting for terminal output
//!
//! Renders statements and balances as tables.

pub mod balance;
pub mod statement;

pub use balance::format_balance_list;
pub use statement::format_statement_list;

//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod balance;
pub mod export;
pub mod import;

pub use balance::{handle_balance_command, BalanceArgs};
pub use export::{handle_export_command, ExportArgs};
pub use import::{handle_import_command, ImportArgs};

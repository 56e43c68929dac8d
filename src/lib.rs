//! bank-statements - CSV bank statement ingestion and balances
//!
//! This library imports bank statement records from CSV uploads, persists the
//! valid ones, exports persisted records as CSV within a date range and
//! computes per-currency account balances.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (statements, balances, date ranges)
//! - `codec`: Schema-driven CSV reading and writing
//! - `storage`: JSON file storage layer
//! - `services`: Import, export and balance pipelines
//! - `display`: Terminal tables
//! - `cli`: Command handlers for the binary
//!
//! # Example
//!
//! ```rust,ignore
//! use bank_statements::codec::Upload;
//! use bank_statements::config::StatementPaths;
//! use bank_statements::services::ImportService;
//! use bank_statements::storage::Storage;
//!
//! let mut storage = Storage::new(&StatementPaths::new()?)?;
//! storage.load_all()?;
//!
//! let upload = Upload::from_path("statements.csv".as_ref())?;
//! let saved = ImportService::new(&storage.statements).import_from_csv(Some(&upload))?;
//! ```

pub mod cli;
pub mod codec;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{StatementError, StatementResult};

//! Configuration module for bank-statements
//!
//! This module provides configuration management including:
//! - Data directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::StatementPaths;
pub use settings::Settings;

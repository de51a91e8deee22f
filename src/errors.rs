//! Error types for the Neoscope crate
//!
//! This module contains all error types that can be returned by Neoscope operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NeoscopeError {
    #[error("Database connection error: {0}")]
    DatabaseConnection(#[from] sqlx::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] asteroid_store::AsteroidStoreError),
}

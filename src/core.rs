//! Core Neoscope functionality
//!
//! This module contains the main Neoscope struct and its implementation,
//! providing the catalog connection pool and access to the store.

use sqlx::PgPool;
use std::time::Duration;

use crate::errors::NeoscopeError;
use asteroid_store::CatalogStore;
use config::{AppConfig, DatabaseConfig};

/// Main Neoscope coordinator that manages the catalog database connection
pub struct Neoscope {
    pool: PgPool,
    statement_timeout_seconds: u64,
}

impl Neoscope {
    /// Create new Neoscope with database connection
    pub async fn new(config: DatabaseConfig) -> Result<Self, NeoscopeError> {
        let connection_string = config.connection_string();

        let mut pool_options = sqlx::postgres::PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.connection_timeout_seconds))
            .idle_timeout(Duration::from_secs(config.idle_timeout_seconds));

        // Set max lifetime if specified
        if config.max_lifetime_seconds > 0 {
            pool_options =
                pool_options.max_lifetime(Duration::from_secs(config.max_lifetime_seconds));
        }

        let pool = pool_options.connect(&connection_string).await?;
        tracing::debug!(
            host = %config.host,
            database = %config.database,
            "catalog pool established"
        );

        Ok(Self {
            pool,
            statement_timeout_seconds: 0,
        })
    }

    /// Create new Neoscope from a full application config
    pub async fn from_config(config: AppConfig) -> Result<Self, NeoscopeError> {
        let mut neoscope = Self::new(config.database).await?;
        neoscope.statement_timeout_seconds = config.explorer.statement_timeout_seconds;
        Ok(neoscope)
    }

    /// Create new Neoscope from the config file discovered via environment
    pub async fn from_env() -> Result<Self, NeoscopeError> {
        let config = AppConfig::load()?;
        Self::from_config(config).await
    }

    /// Get database pool reference
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Catalog store sharing this connection pool
    pub fn catalog(&self) -> CatalogStore {
        CatalogStore::new(self.pool.clone())
            .statement_timeout_from_secs(self.statement_timeout_seconds)
    }

    /// Check database connection health
    pub async fn health_check(&self) -> Result<(), NeoscopeError> {
        sqlx::query("SELECT 1").fetch_one(&self.pool).await?;
        Ok(())
    }
}

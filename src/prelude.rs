//! Convenience re-exports for common Neoscope usage
//!
//! This prelude module re-exports the most commonly used items from the
//! Neoscope stack, making it easier to import everything you need with a
//! single use statement.
//!
//! # Example
//!
//! ```rust
//! use neoscope::prelude::*;
//!
//! // Now you have access to all the common Neoscope types and traits
//! ```

// Core Neoscope components
pub use crate::core::Neoscope;
pub use crate::errors::NeoscopeError;

// Re-export centralized config
pub use config::{AppConfig, ConfigError, DatabaseConfig, ExplorerConfig};

// Re-export commonly used store types for convenience
pub use asteroid_store::prelude::*;

// Re-export the store crate
pub use asteroid_store;

// Common external dependencies
pub use anyhow;
pub use async_trait;
pub use sqlx;
pub use tokio;

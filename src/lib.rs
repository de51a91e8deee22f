//! # Neoscope
//!
//! Exploration core for a near-Earth asteroid dashboard backed by
//! PostgreSQL: a parameterized filter-query builder over the asteroid /
//! close-approach catalog, a fixed menu of predefined analytical questions
//! resolved by ordered keyword rules, and the read-only store that executes
//! both.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use neoscope::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::new(
//!         "localhost".to_string(), 5432, "astro".to_string(),
//!         "postgres".to_string(), "password".to_string(),
//!         1, 5, 30, 600, 3600,
//!     );
//!
//!     let neoscope = Neoscope::new(config).await?;
//!     neoscope.health_check().await?;
//!
//!     let catalog = neoscope.catalog();
//!
//!     // Session initialization: slider bounds come from the store
//!     let bounds = catalog.column_bounds().await?;
//!     let criteria = FilterCriteria::for_session(&bounds)
//!         .with_hazardous(HazardFilter::Yes);
//!
//!     let report = FilterReport::new(catalog.list_by_criteria(&criteria).await?);
//!     println!("{}: {}", HAZARDOUS_METRIC_LABEL, report.hazardous_count);
//!
//!     match catalog.answer("List top 10 fastest asteroids").await? {
//!         Answer::Table(table) => println!("{} rows", table.len()),
//!         Answer::NotRecognized => println!("{}", NOT_RECOGNIZED_MESSAGE),
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod errors;
pub mod prelude;

// Re-export the main public types for convenience
pub use crate::core::Neoscope;
pub use errors::NeoscopeError;

// Re-export centralized config
pub use config::{AppConfig, ConfigError, DatabaseConfig, ExplorerConfig};

// Re-export the store crate used by the public API
pub use asteroid_store;

// Re-export external dependencies used in public API
pub use sqlx;
pub use async_trait;

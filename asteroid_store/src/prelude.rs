//! Convenience re-exports for common asteroid-store usage

// Core traits
pub use crate::traits::CatalogExplorer;

// Error types
pub use crate::errors::AsteroidStoreError;

// Core store functionality
pub use crate::catalog_store::CatalogStore;

// Criteria and session state
pub use crate::criteria::{DateRange, FilterCriteria, HazardFilter, RangeF64, SessionBounds};

// Query building
pub use crate::query_builder::{FilterQuery, QueryValue};

// Predefined questions
pub use crate::predefined::{resolve, Answer, NOT_RECOGNIZED_MESSAGE, QUESTION_CATALOG};

// Results and metrics
pub use crate::metrics::{hazardous_count, FilterReport, HAZARDOUS_METRIC_LABEL};
pub use crate::model::ApproachRecord;
pub use crate::surface::RenderSurface;
pub use crate::table::{CellValue, ResultTable};

// Common external dependencies that are frequently used
pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use sqlx::{FromRow, PgPool, Row};

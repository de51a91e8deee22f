//! Asteroid Store - Exploration core for the Neoscope asteroid catalog
//!
//! This crate provides the query-construction and question-resolution core
//! behind the dashboard: filter criteria, the parameterized filter query
//! builder, the ordered predefined-question rule table, and the read-only
//! catalog store that executes both against PostgreSQL.

pub mod catalog_store;
pub mod criteria;
pub mod errors;
pub mod metrics;
pub mod model;
pub mod predefined;
pub mod prelude;
pub mod query_builder;
pub mod surface;
pub mod table;
pub mod traits;

pub use catalog_store::CatalogStore;
pub use criteria::{DateRange, FilterCriteria, HazardFilter, RangeF64, SessionBounds};
pub use errors::AsteroidStoreError;
pub use metrics::{hazardous_count, FilterReport, HAZARDOUS_METRIC_LABEL};
pub use model::ApproachRecord;
pub use predefined::{resolve, Answer, QuestionRule, NOT_RECOGNIZED_MESSAGE, QUESTION_CATALOG, RULES};
pub use query_builder::{FilterQuery, QueryValue};
pub use surface::RenderSurface;
pub use table::{CellValue, ResultTable};
pub use traits::CatalogExplorer;

use sqlx::PgPool;

pub type DbPool = PgPool;

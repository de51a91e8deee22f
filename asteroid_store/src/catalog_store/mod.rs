//! Catalog store implementations
//!
//! This module provides the read-only store over the asteroid catalog
//! database: session bounds, filter execution and predefined questions.

pub mod core;

mod bounds;
mod explorer;
mod questions;

pub use self::core::CatalogStore;

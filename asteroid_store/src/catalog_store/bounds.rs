//! Session bound queries
//!
//! The filter panel's sliders are clamped to the observed MIN/MAX of their
//! backing columns, fetched fresh at the start of each session.

use super::core::CatalogStore;
use crate::criteria::{RangeF64, SessionBounds};
use crate::errors::AsteroidStoreError;

impl CatalogStore {
    pub(crate) async fn fetch_bounds(&self) -> Result<SessionBounds, AsteroidStoreError> {
        let diameter = self
            .column_range(
                "diameter bounds",
                "SELECT MIN(estimated_diameter_min), MAX(estimated_diameter_max) FROM asteroids",
            )
            .await?;
        let magnitude = self
            .column_range(
                "magnitude bounds",
                "SELECT MIN(absolute_magnitude_h), MAX(absolute_magnitude_h) FROM asteroids",
            )
            .await?;
        let velocity = self
            .column_range(
                "velocity bounds",
                "SELECT MIN(relative_velocity), MAX(relative_velocity) FROM close_approach",
            )
            .await?;
        let miss_distance = self
            .column_range(
                "miss distance bounds",
                "SELECT MIN(miss_distance_km), MAX(miss_distance_km) FROM close_approach",
            )
            .await?;

        Ok(SessionBounds {
            diameter,
            magnitude,
            velocity,
            miss_distance,
        })
    }

    async fn column_range(
        &self,
        operation: &'static str,
        sql: &'static str,
    ) -> Result<RangeF64, AsteroidStoreError> {
        let row: (Option<f64>, Option<f64>) = self
            .guarded(operation, sqlx::query_as(sql).fetch_one(&self.db_pool))
            .await?;

        // Aggregates over an empty table come back NULL
        match row {
            (Some(low), Some(high)) => Ok(RangeF64::new(low, high)),
            _ => Err(AsteroidStoreError::EmptyCatalog(operation)),
        }
    }
}

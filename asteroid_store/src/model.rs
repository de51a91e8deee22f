//! Catalog row types
//!
//! The store is read-only; the only shape the filter path ever fetches is
//! the ten-column asteroid / close-approach join.

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;

/// One row of the joined asteroid / close-approach result set
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct ApproachRecord {
    pub id: i64,
    pub name: String,
    pub absolute_magnitude_h: f64,
    pub estimated_diameter_min: f64,
    pub estimated_diameter_max: f64,
    pub is_potentially_hazardous_asteroid: String,
    pub close_approach_date: NaiveDate,
    pub relative_velocity: f64,
    pub miss_distance_km: f64,
    pub orbiting_body: String,
}

impl ApproachRecord {
    /// Column order of the filter query's result set
    pub const COLUMNS: [&'static str; 10] = [
        "id",
        "name",
        "absolute_magnitude_h",
        "estimated_diameter_min",
        "estimated_diameter_max",
        "is_potentially_hazardous_asteroid",
        "close_approach_date",
        "relative_velocity",
        "miss_distance_km",
        "orbiting_body",
    ];

    /// True when the stored hazardous flag is "Yes"
    pub fn is_hazardous(&self) -> bool {
        self.is_potentially_hazardous_asteroid == "Yes"
    }
}

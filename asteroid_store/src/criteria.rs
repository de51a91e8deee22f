//! Filter-panel state and session initialization
//!
//! The dashboard's filter widgets are clamped to the observed column bounds,
//! so every range carried here satisfies `low <= high` by construction.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Inclusive numeric range backing a slider widget
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeF64 {
    pub low: f64,
    pub high: f64,
}

impl RangeF64 {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }
}

/// Inclusive close-approach date pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }
}

/// Tri-state hazardous selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HazardFilter {
    #[default]
    All,
    Yes,
    No,
}

impl HazardFilter {
    /// The stored flag value to match on, or `None` for "All"
    pub fn as_stored(&self) -> Option<&'static str> {
        match self {
            HazardFilter::All => None,
            HazardFilter::Yes => Some("Yes"),
            HazardFilter::No => Some("No"),
        }
    }
}

/// Observed MIN/MAX of the slider-backed columns, fetched fresh from the
/// store at the start of each session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SessionBounds {
    pub diameter: RangeF64,
    pub magnitude: RangeF64,
    pub velocity: RangeF64,
    pub miss_distance: RangeF64,
}

/// Current filter-panel state
///
/// The diameter range is mandatory; the remaining ranges are applied
/// whenever they carry a value. `for_session` seeds the numeric ranges to
/// the full observed bounds, so after initialization only the name, the
/// hazardous selector and the date pair can be absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub name: String,
    pub hazardous: HazardFilter,
    pub diameter: RangeF64,
    pub magnitude: Option<RangeF64>,
    pub approach_dates: Option<DateRange>,
    pub velocity: Option<RangeF64>,
    pub miss_distance: Option<RangeF64>,
}

impl FilterCriteria {
    /// Explicit once-per-session initialization from store-derived bounds
    pub fn for_session(bounds: &SessionBounds) -> Self {
        Self {
            name: String::new(),
            hazardous: HazardFilter::All,
            diameter: bounds.diameter,
            magnitude: Some(bounds.magnitude),
            approach_dates: None,
            velocity: Some(bounds.velocity),
            miss_distance: Some(bounds.miss_distance),
        }
    }

    /// Set the name substring filter
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the hazardous selector
    pub fn with_hazardous(mut self, hazardous: HazardFilter) -> Self {
        self.hazardous = hazardous;
        self
    }

    /// Set the mandatory diameter range
    pub fn with_diameter(mut self, range: RangeF64) -> Self {
        self.diameter = range;
        self
    }

    /// Set the magnitude range
    pub fn with_magnitude(mut self, range: RangeF64) -> Self {
        self.magnitude = Some(range);
        self
    }

    /// Set the close-approach date pair
    pub fn with_approach_dates(mut self, dates: DateRange) -> Self {
        self.approach_dates = Some(dates);
        self
    }

    /// Set the relative-velocity range
    pub fn with_velocity(mut self, range: RangeF64) -> Self {
        self.velocity = Some(range);
        self
    }

    /// Set the miss-distance range
    pub fn with_miss_distance(mut self, range: RangeF64) -> Self {
        self.miss_distance = Some(range);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_bounds() -> SessionBounds {
        SessionBounds {
            diameter: RangeF64::new(0.001, 8.5),
            magnitude: RangeF64::new(14.0, 33.2),
            velocity: RangeF64::new(1200.0, 160_000.0),
            miss_distance: RangeF64::new(54_000.0, 74_000_000.0),
        }
    }

    #[test]
    fn test_for_session_seeds_full_bounds() {
        let bounds = sample_bounds();
        let criteria = FilterCriteria::for_session(&bounds);

        assert_eq!(criteria.name, "");
        assert_eq!(criteria.hazardous, HazardFilter::All);
        assert_eq!(criteria.diameter, bounds.diameter);
        assert_eq!(criteria.magnitude, Some(bounds.magnitude));
        assert_eq!(criteria.approach_dates, None);
        assert_eq!(criteria.velocity, Some(bounds.velocity));
        assert_eq!(criteria.miss_distance, Some(bounds.miss_distance));
    }

    #[test]
    fn test_with_setters_chain() {
        let bounds = sample_bounds();
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();

        let criteria = FilterCriteria::for_session(&bounds)
            .with_name("Apophis")
            .with_hazardous(HazardFilter::Yes)
            .with_approach_dates(DateRange::new(start, end))
            .with_velocity(RangeF64::new(20_000.0, 100_000.0));

        assert_eq!(criteria.name, "Apophis");
        assert_eq!(criteria.hazardous, HazardFilter::Yes);
        assert_eq!(criteria.approach_dates, Some(DateRange::new(start, end)));
        assert_eq!(criteria.velocity, Some(RangeF64::new(20_000.0, 100_000.0)));
        // Untouched fields keep their session defaults
        assert_eq!(criteria.magnitude, Some(bounds.magnitude));
    }

    #[test]
    fn test_hazard_filter_stored_values() {
        assert_eq!(HazardFilter::All.as_stored(), None);
        assert_eq!(HazardFilter::Yes.as_stored(), Some("Yes"));
        assert_eq!(HazardFilter::No.as_stored(), Some("No"));
    }
}

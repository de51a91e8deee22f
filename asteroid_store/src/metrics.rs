//! Derived metrics over fetched result sets
//!
//! Computed after execution, never inside the SQL statement.

use serde::Serialize;

use crate::model::ApproachRecord;

/// Label under which the surface displays the derived hazardous metric
pub const HAZARDOUS_METRIC_LABEL: &str = "Hazardous Count";

/// Count of result rows flagged potentially hazardous
pub fn hazardous_count(records: &[ApproachRecord]) -> usize {
    records.iter().filter(|record| record.is_hazardous()).count()
}

/// Outcome of one filter interaction: the rows plus the derived metric
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterReport {
    pub records: Vec<ApproachRecord>,
    pub hazardous_count: usize,
}

impl FilterReport {
    pub fn new(records: Vec<ApproachRecord>) -> Self {
        let hazardous_count = hazardous_count(&records);
        Self {
            records,
            hazardous_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(flag: &str) -> ApproachRecord {
        ApproachRecord {
            id: 1,
            name: "Test".to_string(),
            absolute_magnitude_h: 20.0,
            estimated_diameter_min: 0.1,
            estimated_diameter_max: 0.2,
            is_potentially_hazardous_asteroid: flag.to_string(),
            close_approach_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            relative_velocity: 30_000.0,
            miss_distance_km: 1_000_000.0,
            orbiting_body: "Earth".to_string(),
        }
    }

    #[test]
    fn test_hazardous_count_counts_yes_rows() {
        let records = vec![
            record("Yes"),
            record("No"),
            record("Yes"),
            record("No"),
            record("No"),
            record("Yes"),
            record("No"),
        ];

        assert_eq!(hazardous_count(&records), 3);
    }

    #[test]
    fn test_hazardous_count_empty() {
        assert_eq!(hazardous_count(&[]), 0);
    }

    #[test]
    fn test_filter_report_carries_metric() {
        let report = FilterReport::new(vec![record("Yes"), record("No")]);
        assert_eq!(report.records.len(), 2);
        assert_eq!(report.hazardous_count, 1);
    }
}

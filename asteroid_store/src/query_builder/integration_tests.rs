//! Query builder utilities
//!
//! End-to-end tests from session initialization through statement building.

#[cfg(test)]
mod integration_tests {
    use crate::criteria::{FilterCriteria, HazardFilter, RangeF64, SessionBounds};
    use crate::query_builder::build;
    use crate::query_builder::value::QueryValue;

    fn observed_bounds() -> SessionBounds {
        SessionBounds {
            diameter: RangeF64::new(0.0006, 8.57),
            magnitude: RangeF64::new(13.9, 33.2),
            velocity: RangeF64::new(1_207.0, 160_518.0),
            miss_distance: RangeF64::new(54_388.0, 74_798_651.0),
        }
    }

    // ========================================
    // Session Defaults Through the Builder
    // ========================================

    #[test]
    fn test_session_defaults_apply_three_ranges() {
        // Freshly initialized criteria carry full-bounds ranges for
        // magnitude, velocity and miss distance, so those predicates are
        // applied even before the user touches a widget. Only the name,
        // hazard selector and date pair stay absent.
        let criteria = FilterCriteria::for_session(&observed_bounds());
        let query = build(&criteria);

        assert!(query.sql.contains("a.estimated_diameter_min >= $1"));
        assert!(query.sql.contains("a.estimated_diameter_max <= $2"));
        assert!(query.sql.contains("a.absolute_magnitude_h BETWEEN $3 AND $4"));
        assert!(query.sql.contains("c.relative_velocity BETWEEN $5 AND $6"));
        assert!(query.sql.contains("c.miss_distance_km BETWEEN $7 AND $8"));

        assert!(!query.sql.contains("ILIKE"));
        assert!(!query.sql.contains("is_potentially_hazardous_asteroid ="));
        assert!(!query.sql.contains("close_approach_date"));

        assert_eq!(query.params.len(), 8);
    }

    #[test]
    fn test_session_default_params_equal_bounds() {
        let bounds = observed_bounds();
        let query = build(&FilterCriteria::for_session(&bounds));

        assert_eq!(
            query.params,
            vec![
                QueryValue::Float(bounds.diameter.low),
                QueryValue::Float(bounds.diameter.high),
                QueryValue::Float(bounds.magnitude.low),
                QueryValue::Float(bounds.magnitude.high),
                QueryValue::Float(bounds.velocity.low),
                QueryValue::Float(bounds.velocity.high),
                QueryValue::Float(bounds.miss_distance.low),
                QueryValue::Float(bounds.miss_distance.high),
            ]
        );
    }

    // ========================================
    // Placeholder / Parameter Alignment
    // ========================================

    #[test]
    fn test_placeholder_count_always_matches_params() {
        let bounds = observed_bounds();
        let variants = vec![
            FilterCriteria::for_session(&bounds),
            FilterCriteria::for_session(&bounds).with_name("bennu"),
            FilterCriteria::for_session(&bounds).with_hazardous(HazardFilter::Yes),
            FilterCriteria::for_session(&bounds)
                .with_name("eros")
                .with_hazardous(HazardFilter::No),
        ];

        for criteria in variants {
            let query = build(&criteria);
            let placeholders = query.sql.matches('$').count();
            assert_eq!(placeholders, query.params.len());
            // Highest placeholder index equals the parameter count
            assert!(query.sql.contains(&format!("${}", query.params.len())));
        }
    }

    #[test]
    fn test_rebuilds_are_stable_across_many_calls() {
        let criteria = FilterCriteria::for_session(&observed_bounds()).with_name("icarus");
        let reference = build(&criteria);

        for _ in 0..100 {
            assert_eq!(build(&criteria), reference);
        }
    }
}

//! Query builder utilities
//!
//! Maps filter-panel criteria to one parameterized SELECT over the
//! asteroid / close-approach join.

use crate::criteria::FilterCriteria;
use crate::query_builder::filter::QueryCondition;
use crate::query_builder::sql_generation::SqlGenerator;
use crate::query_builder::value::QueryValue;
use serde::Serialize;

/// Base statement: every filter query selects the same ten joined columns.
/// The inner join drops asteroids with no recorded approach.
pub const BASE_SELECT: &str = "SELECT a.id, a.name, a.absolute_magnitude_h, \
a.estimated_diameter_min, a.estimated_diameter_max, \
a.is_potentially_hazardous_asteroid, c.close_approach_date, \
c.relative_velocity, c.miss_distance_km, c.orbiting_body \
FROM asteroids a JOIN close_approach c ON a.id = c.neo_list_id";

/// One parameterized filter statement plus its positionally-ordered
/// parameter list. Request-scoped; rebuilt on every interaction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterQuery {
    pub sql: String,
    pub params: Vec<QueryValue>,
}

/// Build the filter statement for the given criteria
///
/// The diameter pair is always applied; optional predicates are appended in
/// a fixed order (name, hazardous, magnitude, dates, velocity, miss
/// distance), each only when its criteria field carries a value. Parameter
/// order follows predicate order exactly.
pub fn build(criteria: &FilterCriteria) -> FilterQuery {
    let conditions = criteria_conditions(criteria);
    let (where_clause, params) = SqlGenerator::build_where_clause(&conditions);

    let mut sql = String::with_capacity(BASE_SELECT.len() + 1 + where_clause.len());
    sql.push_str(BASE_SELECT);
    sql.push(' ');
    sql.push_str(&where_clause);

    FilterQuery { sql, params }
}

fn criteria_conditions(criteria: &FilterCriteria) -> Vec<QueryCondition> {
    // Mandatory diameter pair comes first
    let mut conditions = vec![
        QueryCondition::gte(
            "a.estimated_diameter_min",
            QueryValue::Float(criteria.diameter.low),
        ),
        QueryCondition::lte(
            "a.estimated_diameter_max",
            QueryValue::Float(criteria.diameter.high),
        ),
    ];

    if !criteria.name.is_empty() {
        conditions.push(QueryCondition::ilike(
            "a.name",
            &format!("%{}%", criteria.name),
        ));
    }

    if let Some(flag) = criteria.hazardous.as_stored() {
        conditions.push(QueryCondition::eq(
            "a.is_potentially_hazardous_asteroid",
            QueryValue::text(flag),
        ));
    }

    if let Some(range) = &criteria.magnitude {
        conditions.push(QueryCondition::between(
            "a.absolute_magnitude_h",
            QueryValue::Float(range.low),
            QueryValue::Float(range.high),
        ));
    }

    if let Some(dates) = &criteria.approach_dates {
        conditions.push(QueryCondition::between(
            "c.close_approach_date",
            QueryValue::Date(dates.start),
            QueryValue::Date(dates.end),
        ));
    }

    if let Some(range) = &criteria.velocity {
        conditions.push(QueryCondition::between(
            "c.relative_velocity",
            QueryValue::Float(range.low),
            QueryValue::Float(range.high),
        ));
    }

    if let Some(range) = &criteria.miss_distance {
        conditions.push(QueryCondition::between(
            "c.miss_distance_km",
            QueryValue::Float(range.low),
            QueryValue::Float(range.high),
        ));
    }

    conditions
}

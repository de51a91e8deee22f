//! Query builder utilities
//!
//! Condition types for the filter panel's WHERE clause.

use crate::query_builder::value::QueryValue;

/// Query condition operators
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOperator {
    Eq,      // =
    Gte,     // >=
    Lte,     // <=
    ILike,   // ILIKE (case insensitive)
    Between, // BETWEEN low AND high
}

/// Single condition in a WHERE clause
///
/// `values` holds one entry for the comparison operators and two (low,
/// high) for `Between`.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryCondition {
    pub field: String,
    pub operator: QueryOperator,
    pub values: Vec<QueryValue>,
}

impl QueryCondition {
    /// Create a condition with an explicit value list
    pub fn condition(field: &str, operator: QueryOperator, values: Vec<QueryValue>) -> Self {
        Self {
            field: field.to_string(),
            operator,
            values,
        }
    }

    /// Equal condition
    pub fn eq(field: &str, value: QueryValue) -> Self {
        Self::condition(field, QueryOperator::Eq, vec![value])
    }

    /// Greater than or equal condition
    pub fn gte(field: &str, value: QueryValue) -> Self {
        Self::condition(field, QueryOperator::Gte, vec![value])
    }

    /// Less than or equal condition
    pub fn lte(field: &str, value: QueryValue) -> Self {
        Self::condition(field, QueryOperator::Lte, vec![value])
    }

    /// ILIKE condition (case insensitive)
    pub fn ilike(field: &str, pattern: &str) -> Self {
        Self::condition(field, QueryOperator::ILike, vec![QueryValue::text(pattern)])
    }

    /// Inclusive range condition
    pub fn between(field: &str, low: QueryValue, high: QueryValue) -> Self {
        Self::condition(field, QueryOperator::Between, vec![low, high])
    }
}

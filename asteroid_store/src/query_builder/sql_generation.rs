//! Query builder utilities
//!
//! Renders condition lists into SQL text with `$n` positional placeholders.

use crate::query_builder::filter::{QueryCondition, QueryOperator};
use crate::query_builder::value::QueryValue;

pub struct SqlGenerator;

impl SqlGenerator {
    /// Build WHERE clause from conditions
    ///
    /// Placeholders are numbered in condition order; the returned values are
    /// positionally aligned with them.
    pub fn build_where_clause(conditions: &[QueryCondition]) -> (String, Vec<QueryValue>) {
        if conditions.is_empty() {
            return (String::new(), Vec::new());
        }

        let mut values = Vec::new();
        let mut param_counter = 1;

        let conditions_sql = conditions
            .iter()
            .map(|condition| Self::build_condition_sql(condition, &mut values, &mut param_counter))
            .collect::<Vec<_>>()
            .join(" AND ");

        (format!("WHERE {}", conditions_sql), values)
    }

    fn build_condition_sql(
        condition: &QueryCondition,
        values: &mut Vec<QueryValue>,
        param_counter: &mut i32,
    ) -> String {
        let field = &condition.field;

        match &condition.operator {
            QueryOperator::Eq => {
                Self::single_param_sql(field, "=", condition, values, param_counter)
            }
            QueryOperator::Gte => {
                Self::single_param_sql(field, ">=", condition, values, param_counter)
            }
            QueryOperator::Lte => {
                Self::single_param_sql(field, "<=", condition, values, param_counter)
            }
            QueryOperator::ILike => {
                Self::single_param_sql(field, "ILIKE", condition, values, param_counter)
            }
            QueryOperator::Between => {
                if let [low, high] = condition.values.as_slice() {
                    values.push(low.clone());
                    let low_param = format!("${}", param_counter);
                    *param_counter += 1;
                    values.push(high.clone());
                    let high_param = format!("${}", param_counter);
                    *param_counter += 1;
                    format!("{} BETWEEN {} AND {}", field, low_param, high_param)
                } else {
                    "1=0".to_string() // Invalid condition
                }
            }
        }
    }

    fn single_param_sql(
        field: &str,
        op_sql: &str,
        condition: &QueryCondition,
        values: &mut Vec<QueryValue>,
        param_counter: &mut i32,
    ) -> String {
        if let [value] = condition.values.as_slice() {
            values.push(value.clone());
            let param = format!("${}", param_counter);
            *param_counter += 1;
            format!("{} {} {}", field, op_sql, param)
        } else {
            "1=0".to_string() // Invalid condition
        }
    }
}

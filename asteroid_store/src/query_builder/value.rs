//! Dynamically typed SQL parameter values

use chrono::NaiveDate;
use serde::Serialize;

/// A single bound parameter value
///
/// Values bind natively to their PostgreSQL column types; the executor must
/// bind them strictly in list order, matching the `$n` placeholders.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum QueryValue {
    Float(f64),
    Text(String),
    Date(NaiveDate),
}

impl QueryValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }
}

impl From<f64> for QueryValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<NaiveDate> for QueryValue {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

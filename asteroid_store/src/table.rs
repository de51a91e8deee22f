//! Tabular query results for the rendering surface
//!
//! Predefined templates return result sets of varying shapes, so rows are
//! decoded dynamically by column type into a uniform cell representation.

use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::postgres::PgRow;
use sqlx::{Column, Row, TypeInfo};

use crate::errors::AsteroidStoreError;
use crate::model::ApproachRecord;

/// Single cell of a dynamically typed result table
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Null,
    Int(i64),
    Float(f64),
    Text(String),
    Date(NaiveDate),
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Null => Ok(()),
            CellValue::Int(value) => write!(f, "{}", value),
            CellValue::Float(value) => write!(f, "{}", value),
            CellValue::Text(value) => f.write_str(value),
            CellValue::Date(value) => write!(f, "{}", value),
        }
    }
}

/// Ordered columns and rows handed to the rendering surface
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl ResultTable {
    /// Decode fetched rows into a table
    ///
    /// Column metadata comes from the first row; an empty result set yields
    /// an empty table.
    pub fn from_pg_rows(rows: &[PgRow]) -> Result<Self, AsteroidStoreError> {
        let columns = rows
            .first()
            .map(|row| {
                row.columns()
                    .iter()
                    .map(|column| column.name().to_string())
                    .collect()
            })
            .unwrap_or_default();

        let mut decoded = Vec::with_capacity(rows.len());
        for row in rows {
            decoded.push(Self::decode_row(row)?);
        }

        Ok(Self {
            columns,
            rows: decoded,
        })
    }

    /// Build a table from typed filter-query records
    pub fn from_records(records: &[ApproachRecord]) -> Self {
        let columns = ApproachRecord::COLUMNS
            .iter()
            .map(|name| name.to_string())
            .collect();

        let rows = records
            .iter()
            .map(|record| {
                vec![
                    CellValue::Int(record.id),
                    CellValue::Text(record.name.clone()),
                    CellValue::Float(record.absolute_magnitude_h),
                    CellValue::Float(record.estimated_diameter_min),
                    CellValue::Float(record.estimated_diameter_max),
                    CellValue::Text(record.is_potentially_hazardous_asteroid.clone()),
                    CellValue::Date(record.close_approach_date),
                    CellValue::Float(record.relative_velocity),
                    CellValue::Float(record.miss_distance_km),
                    CellValue::Text(record.orbiting_body.clone()),
                ]
            })
            .collect();

        Self { columns, rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn decode_row(row: &PgRow) -> Result<Vec<CellValue>, AsteroidStoreError> {
        row.columns()
            .iter()
            .enumerate()
            .map(|(index, column)| decode_cell(row, index, column.type_info().name()))
            .collect()
    }
}

fn decode_cell(
    row: &PgRow,
    index: usize,
    type_name: &str,
) -> Result<CellValue, AsteroidStoreError> {
    let decode_error = |error: sqlx::Error| AsteroidStoreError::Decode(error.to_string());

    let cell = match type_name {
        "TEXT" | "VARCHAR" | "BPCHAR" | "NAME" => row
            .try_get::<Option<String>, _>(index)
            .map_err(decode_error)?
            .map(CellValue::Text),
        "INT2" => row
            .try_get::<Option<i16>, _>(index)
            .map_err(decode_error)?
            .map(|value| CellValue::Int(i64::from(value))),
        "INT4" => row
            .try_get::<Option<i32>, _>(index)
            .map_err(decode_error)?
            .map(|value| CellValue::Int(i64::from(value))),
        "INT8" => row
            .try_get::<Option<i64>, _>(index)
            .map_err(decode_error)?
            .map(CellValue::Int),
        "FLOAT4" => row
            .try_get::<Option<f32>, _>(index)
            .map_err(decode_error)?
            .map(|value| CellValue::Float(f64::from(value))),
        "FLOAT8" => row
            .try_get::<Option<f64>, _>(index)
            .map_err(decode_error)?
            .map(CellValue::Float),
        "DATE" => row
            .try_get::<Option<NaiveDate>, _>(index)
            .map_err(decode_error)?
            .map(CellValue::Date),
        other => {
            return Err(AsteroidStoreError::Decode(format!(
                "unsupported column type {other} at index {index}"
            )))
        }
    };

    Ok(cell.unwrap_or(CellValue::Null))
}

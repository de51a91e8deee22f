//! Catalog store implementations
//!
//! `CatalogExplorer` implementation: one blocking round trip per call,
//! parameters bound strictly in builder order.

use async_trait::async_trait;
use sqlx::postgres::PgArguments;
use sqlx::query::QueryAs;

use super::core::CatalogStore;
use crate::criteria::{FilterCriteria, SessionBounds};
use crate::errors::AsteroidStoreError;
use crate::model::ApproachRecord;
use crate::predefined::Answer;
use crate::query_builder::{self, QueryValue};
use crate::traits::CatalogExplorer;

#[async_trait]
impl CatalogExplorer for CatalogStore {
    async fn column_bounds(&self) -> Result<SessionBounds, AsteroidStoreError> {
        self.fetch_bounds().await
    }

    async fn list_by_criteria(
        &self,
        criteria: &FilterCriteria,
    ) -> Result<Vec<ApproachRecord>, AsteroidStoreError> {
        let query = query_builder::build(criteria);
        tracing::debug!(
            sql = %query.sql,
            params = query.params.len(),
            "executing filter query"
        );

        let mut fetch = sqlx::query_as::<_, ApproachRecord>(&query.sql);
        for value in &query.params {
            fetch = bind_value(fetch, value);
        }

        self.guarded("list_by_criteria", fetch.fetch_all(&self.db_pool))
            .await
    }

    async fn answer(&self, question: &str) -> Result<Answer, AsteroidStoreError> {
        self.run_question(question).await
    }
}

/// Bind one dynamically typed parameter to its native PostgreSQL type
fn bind_value<'q>(
    query: QueryAs<'q, sqlx::Postgres, ApproachRecord, PgArguments>,
    value: &QueryValue,
) -> QueryAs<'q, sqlx::Postgres, ApproachRecord, PgArguments> {
    match value {
        QueryValue::Float(v) => query.bind(*v),
        QueryValue::Text(v) => query.bind(v.clone()),
        QueryValue::Date(v) => query.bind(*v),
    }
}

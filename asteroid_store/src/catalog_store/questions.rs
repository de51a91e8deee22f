//! Predefined question execution
//!
//! Resolution is pure (`predefined::resolve`); this half runs the matched
//! template and decodes its rows for the surface.

use super::core::CatalogStore;
use crate::errors::AsteroidStoreError;
use crate::predefined::{self, Answer};
use crate::table::ResultTable;

impl CatalogStore {
    pub(crate) async fn run_question(
        &self,
        question: &str,
    ) -> Result<Answer, AsteroidStoreError> {
        match predefined::resolve(question) {
            Some(rule) => {
                tracing::debug!(rule = rule.label, "resolved predefined question");

                let rows = self
                    .guarded(
                        "run_question",
                        sqlx::query(rule.sql).fetch_all(&self.db_pool),
                    )
                    .await?;

                Ok(Answer::Table(ResultTable::from_pg_rows(&rows)?))
            }
            None => {
                tracing::warn!(question, "predefined question not recognized");
                Ok(Answer::NotRecognized)
            }
        }
    }
}

use async_trait::async_trait;

use crate::criteria::{FilterCriteria, SessionBounds};
use crate::errors::AsteroidStoreError;
use crate::model::ApproachRecord;
use crate::predefined::Answer;

/// Read-only exploration interface over the asteroid catalog
#[async_trait]
pub trait CatalogExplorer {
    /// Observed column bounds used to seed a session's filter widgets
    async fn column_bounds(&self) -> Result<SessionBounds, AsteroidStoreError>;

    /// Execute the filter statement for the given criteria
    async fn list_by_criteria(
        &self,
        criteria: &FilterCriteria,
    ) -> Result<Vec<ApproachRecord>, AsteroidStoreError>;

    /// Resolve a predefined question and execute its template
    async fn answer(&self, question: &str) -> Result<Answer, AsteroidStoreError>;
}

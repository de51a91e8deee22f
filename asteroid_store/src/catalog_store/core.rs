use std::future::Future;
use std::time::Duration;

use crate::errors::AsteroidStoreError;
use crate::DbPool;

/// Read-only store over the asteroid catalog database
///
/// Each method is one blocking round trip to the store; nothing is cached
/// between interactions.
#[derive(Clone)]
pub struct CatalogStore {
    pub(crate) db_pool: DbPool,
    pub(crate) statement_timeout: Option<Duration>,
}

impl std::fmt::Debug for CatalogStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogStore")
            .field("statement_timeout", &self.statement_timeout)
            .finish()
    }
}

impl CatalogStore {
    pub fn new(db_pool: DbPool) -> Self {
        Self {
            db_pool,
            statement_timeout: None,
        }
    }

    /// Bound every store round trip to the given duration
    pub fn with_statement_timeout(mut self, timeout: Duration) -> Self {
        self.statement_timeout = Some(timeout);
        self
    }

    /// Configure the timeout from whole seconds; 0 disables it
    pub fn statement_timeout_from_secs(self, seconds: u64) -> Self {
        if seconds == 0 {
            self
        } else {
            self.with_statement_timeout(Duration::from_secs(seconds))
        }
    }

    /// Check if a statement timeout is configured
    pub fn has_statement_timeout(&self) -> bool {
        self.statement_timeout.is_some()
    }

    /// Run one store round trip, applying the configured timeout and
    /// wrapping driver errors with the failing operation
    pub(crate) async fn guarded<T, F>(
        &self,
        operation: &'static str,
        query: F,
    ) -> Result<T, AsteroidStoreError>
    where
        F: Future<Output = Result<T, sqlx::Error>>,
    {
        let outcome = match self.statement_timeout {
            Some(limit) => match tokio::time::timeout(limit, query).await {
                Ok(result) => result,
                Err(_) => {
                    return Err(AsteroidStoreError::Timeout {
                        operation,
                        seconds: limit.as_secs(),
                    });
                }
            },
            None => query.await,
        };

        outcome.map_err(|source| AsteroidStoreError::database(operation, source))
    }
}

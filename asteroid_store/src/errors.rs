use thiserror::Error;

#[derive(Error, Debug)]
pub enum AsteroidStoreError {
    #[error("Database error during {operation}: {source}")]
    Database {
        operation: &'static str,
        #[source]
        source: sqlx::Error,
    },

    #[error("Catalog is empty: {0}")]
    EmptyCatalog(&'static str),

    #[error("Row decode error: {0}")]
    Decode(String),

    #[error("Statement timed out during {operation} after {seconds}s")]
    Timeout {
        operation: &'static str,
        seconds: u64,
    },
}

impl AsteroidStoreError {
    /// Wrap a driver error with the store operation that raised it
    pub fn database(operation: &'static str, source: sqlx::Error) -> Self {
        Self::Database { operation, source }
    }
}

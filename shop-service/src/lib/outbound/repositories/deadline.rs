use std::future::Future;
use std::time::Duration;

/// Why a store call did not produce a result.
#[derive(Debug)]
pub enum StoreFailure {
    Timeout(Duration),
    Database(sqlx::Error),
}

impl StoreFailure {
    /// Constraint name if this is a unique-constraint violation.
    pub fn unique_violation(&self) -> Option<&str> {
        match self {
            StoreFailure::Database(e) => e
                .as_database_error()
                .filter(|db_err| db_err.is_unique_violation())
                .and_then(|db_err| db_err.constraint()),
            StoreFailure::Timeout(_) => None,
        }
    }
}

impl std::fmt::Display for StoreFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreFailure::Timeout(deadline) => {
                write!(f, "query exceeded deadline of {}ms", deadline.as_millis())
            }
            StoreFailure::Database(e) => e.fmt(f),
        }
    }
}

/// Run a query, failing with `StoreFailure::Timeout` once `deadline` elapses.
pub async fn with_deadline<T, F>(deadline: Duration, query: F) -> Result<T, StoreFailure>
where
    F: Future<Output = Result<T, sqlx::Error>>,
{
    match tokio::time::timeout(deadline, query).await {
        Ok(result) => result.map_err(StoreFailure::Database),
        Err(_) => {
            tracing::error!(deadline_ms = deadline.as_millis() as u64, "Store call timed out");
            Err(StoreFailure::Timeout(deadline))
        }
    }
}

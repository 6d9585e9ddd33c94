use thiserror::Error;

/// Typed failures of the order placement service
///
/// Only [`OrderError::PersistenceConflict`] is safe to retry transparently;
/// retrying `InsufficientStock` without new input is pointless and is never
/// done by the service itself.
#[derive(Debug, Error)]
pub enum OrderError {
    #[error("Product {0} not found")]
    ProductNotFound(i64),

    #[error("Order {0} not found")]
    OrderNotFound(i64),

    #[error("Requested quantity must be a positive integer, got {0}")]
    InvalidQuantity(i32),

    #[error("Insufficient stock: requested {requested}, available {available}")]
    InsufficientStock { requested: i32, available: i32 },

    #[error("Transaction could not commit atomically: {0}")]
    PersistenceConflict(String),

    #[error("Database error: {0}")]
    Database(sqlx::Error),
}

impl OrderError {
    /// Whether the whole operation may be retried from scratch
    pub fn is_retryable(&self) -> bool {
        matches!(self, OrderError::PersistenceConflict(_))
    }
}

impl From<sqlx::Error> for OrderError {
    fn from(err: sqlx::Error) -> Self {
        // Postgres reports lost races on concurrent transactions as
        // serialization failures (40001) or deadlocks (40P01). Both mean the
        // transaction did not commit and may be retried from scratch.
        if let sqlx::Error::Database(ref db_err) = err {
            if matches!(db_err.code().as_deref(), Some("40001") | Some("40P01")) {
                return OrderError::PersistenceConflict(db_err.to_string());
            }
        }
        OrderError::Database(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_persistence_conflict_is_retryable() {
        assert!(OrderError::PersistenceConflict("40001".into()).is_retryable());
        assert!(!OrderError::ProductNotFound(1).is_retryable());
        assert!(!OrderError::InvalidQuantity(0).is_retryable());
        assert!(
            !OrderError::InsufficientStock {
                requested: 5,
                available: 2
            }
            .is_retryable()
        );
    }

    #[test]
    fn test_non_database_sqlx_error_maps_to_database() {
        let err: OrderError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, OrderError::Database(_)));
    }
}

//! # Store Errors
//!
//! Failures raised while talking to the relational store.

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Data store errors
///
/// Every variant surfaces to HTTP clients as a server error. The message is
/// the store's own diagnostic.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// Pool could not be created
    #[error("Failed to connect to database: {0}")]
    Connect(String),

    /// Statement failed (connectivity, constraint violation, malformed SQL)
    #[error("{0}")]
    Query(String),

    /// A returned column had a type the row decoder does not handle
    #[error("Unsupported column type for '{0}'")]
    Decode(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        StoreError::Query(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_error_keeps_store_message() {
        let err = StoreError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, StoreError::Query(_)));
        assert_eq!(err.to_string(), sqlx::Error::RowNotFound.to_string());
    }
}

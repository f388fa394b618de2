//! Store error types.

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors surfaced by the record store
#[derive(Debug, Error)]
pub enum StoreError {
    /// Pool creation or connection failure
    #[error("Database connection error: {message} (cause: {cause})")]
    Connection {
        message: String,
        cause: String,
    },

    /// Statement execution failure
    #[error("Query execution error: {message}")]
    Query {
        message: String,
        sql: Option<String>,
    },

    /// Schema sync failure
    #[error("Schema sync error: {message}")]
    Schema {
        message: String,
    },
}

impl StoreError {
    pub fn is_connection(&self) -> bool {
        matches!(self, StoreError::Connection { .. })
    }

    pub fn is_query(&self) -> bool {
        matches!(self, StoreError::Query { .. })
    }

    pub fn is_schema(&self) -> bool {
        matches!(self, StoreError::Schema { .. })
    }
}

//! Error types for query construction.

use thiserror::Error;

/// Errors raised while constructing a query descriptor.
#[derive(Debug, Error)]
pub enum QueryError {
    /// An operation was given an argument it cannot accept.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type alias for query construction.
pub type Result<T> = std::result::Result<T, QueryError>;

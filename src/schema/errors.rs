//! Validation error types
//!
//! A validation failure never reaches the store; it is reported to the
//! client as a bad request.

use thiserror::Error;

/// Payload rejected before any query is built
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// One or more required fields absent or empty.
    ///
    /// Displays as the messages joined by a single space.
    #[error("{}", messages.join(" "))]
    MissingFields { messages: Vec<String> },

    /// Fields were present but could not be read as the expected types
    #[error("{0}")]
    Malformed(String),
}

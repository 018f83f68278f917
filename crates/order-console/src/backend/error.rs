//! Error types for the in-process record backend.

use record_actor::StoreError;
use thiserror::Error;

/// Errors raised by backend record operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RecordError {
    /// The requested record was not found.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// The record payload was rejected (e.g. a zero-quantity line).
    #[error("Record validation error: {0}")]
    ValidationError(String),

    /// The owning actor rejected the request.
    #[error("Record rejected: {0}")]
    Rejected(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<StoreError> for RecordError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(id) => RecordError::NotFound(id),
            StoreError::RecordError(inner) => RecordError::Rejected(inner.to_string()),
            other => RecordError::ActorCommunicationError(other.to_string()),
        }
    }
}

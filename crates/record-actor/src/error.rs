//! # Store Errors
//!
//! Errors raised by the record actor plumbing itself, as opposed to the
//! per-record errors carried inside [`StoreError::RecordError`].

/// Errors that can occur while talking to a `RecordActor`.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Record not found: {0}")]
    NotFound(String),
    #[error("Record error: {0}")]
    RecordError(Box<dyn std::error::Error + Send + Sync>),
}

//! Error types for labeledit-session

use thiserror::Error;

/// Errors that can occur at the session surface
#[derive(Debug, Error)]
pub enum SessionError {
    /// Command submitted after the session was closed
    #[error("command queue is closed")]
    QueueClosed,

    /// The worker thread terminated without delivering a result
    #[error("worker thread terminated unexpectedly")]
    WorkerFailed,

    /// Morphology or merge error from the executed command
    #[error("morphology error: {0}")]
    Morph(#[from] labeledit_morph::MorphError),
}

/// Result type for session operations
pub type SessionResult<T> = Result<T, SessionError>;

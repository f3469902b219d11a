use thiserror::Error;
use tokio::task::JoinError;

use spejare_capture::SourceError;

/// Errors that end a capture session abnormally.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The frame source failed irrecoverably.
    #[error("frame source error: {0}")]
    Source(#[from] SourceError),

    /// Writing a report line failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The blocking capture task panicked or was aborted.
    #[error("capture task failed: {0}")]
    Task(String),
}

impl From<JoinError> for SessionError {
    fn from(err: JoinError) -> Self {
        SessionError::Task(err.to_string())
    }
}

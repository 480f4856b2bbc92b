//! Backend error taxonomy.

use thiserror::Error;

/// Failure talking to the hosted backend.
///
/// There is no structured error-code scheme: the service hands back
/// human-readable messages and those are passed through unchanged.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The service answered with a non-success status and a message
    /// (invalid or expired grant, policy violation, row-level denial).
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// Transport-level failure before any response was produced.
    #[error("backend request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body did not match the expected shape.
    #[error("unexpected backend response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl BackendError {
    /// HTTP status to relay to the browser client.
    pub fn status(&self) -> u16 {
        match self {
            BackendError::Rejected { status, .. } => *status,
            BackendError::Transport(_) => 502,
            BackendError::Decode(_) => 502,
        }
    }
}

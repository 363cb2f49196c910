//! Backend adapter error types.

use thiserror::Error;

use mistdebug_domain::error::ConsoleError;

/// Errors raised while talking to the debug backend.
#[derive(Debug, Error)]
pub enum BackendError {
    /// HTTP transport error (connection refused, body read failure, …).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the backend.
        status: u16,
        /// Error text extracted from the response body.
        message: String,
    },

    /// The response body does not have the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<BackendError> for ConsoleError {
    fn from(err: BackendError) -> Self {
        match err {
            BackendError::Api { status, message } => Self::Backend { status, message },
            other => Self::Transport(Box::new(other)),
        }
    }
}

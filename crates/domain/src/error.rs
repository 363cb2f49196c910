//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`ConsoleError`]
//! at the port boundary via `From`.

/// Errors surfaced by console actions.
///
/// The console never classifies failures beyond "the backend said no" and
/// "the request did not complete"; [`ConsoleError::user_message`] yields the
/// text shown to the operator in either case.
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    /// The backend answered with a non-success status.
    #[error("backend returned status {status}: {message}")]
    Backend {
        /// HTTP status code.
        status: u16,
        /// Error text extracted from the response body.
        message: String,
    },

    /// The request failed before a usable response was received
    /// (connection refused, malformed body, …).
    #[error("{0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The creation form could not be converted into a request.
    #[error("invalid form")]
    Draft(#[from] DraftError),

    /// The named resource type does not exist.
    #[error("unknown resource type")]
    UnknownResource(#[from] UnknownResource),
}

impl ConsoleError {
    /// Text displayed in the operator notification.
    ///
    /// Backend failures show whatever the backend reported; other failures
    /// show the underlying error text.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Backend { message, .. } => message.clone(),
            Self::Transport(err) => err.to_string(),
            Self::Draft(err) => err.to_string(),
            Self::UnknownResource(err) => err.to_string(),
        }
    }
}

/// A creation form value that cannot be sent as-is.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    /// A numeric field holds something other than an integer.
    #[error("{field} must be a number, got {value:?}")]
    InvalidNumber {
        /// Form field name.
        field: &'static str,
        /// Submitted value.
        value: String,
    },
}

/// A path or query named a resource type outside the six known ones.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown resource type: {0}")]
pub struct UnknownResource(pub String);

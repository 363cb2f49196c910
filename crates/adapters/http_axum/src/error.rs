//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use mistdebug_domain::error::{ConsoleError, UnknownResource};

/// JSON error body.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Errors a handler can answer with instead of its page.
///
/// Action failures never get here: the console service turns them into
/// notifications. What remains is bad routing input and template failures.
#[derive(Debug)]
pub enum ApiError {
    Console(ConsoleError),
    Render(askama::Error),
}

impl From<ConsoleError> for ApiError {
    fn from(err: ConsoleError) -> Self {
        Self::Console(err)
    }
}

impl From<UnknownResource> for ApiError {
    fn from(err: UnknownResource) -> Self {
        Self::Console(err.into())
    }
}

impl From<askama::Error> for ApiError {
    fn from(err: askama::Error) -> Self {
        Self::Render(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::Console(err @ ConsoleError::UnknownResource(_)) => {
                (StatusCode::NOT_FOUND, err.user_message())
            }
            Self::Console(err @ ConsoleError::Draft(_)) => {
                (StatusCode::BAD_REQUEST, err.user_message())
            }
            Self::Console(err) => (StatusCode::BAD_GATEWAY, err.user_message()),
            Self::Render(err) => {
                tracing::error!(error = %err, "template rendering failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

//! Shared HTTP response helpers.
//!
//! Non-success statuses become [`BackendError::Api`] carrying the text the
//! backend put in the body, so the client methods only deal with success
//! bodies.

use serde::Deserialize;

use crate::error::BackendError;

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
    message: Option<String>,
}

/// Return the response unchanged on success, otherwise an
/// [`BackendError::Api`] with the backend's error text.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, BackendError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(BackendError::Api {
        status: status.as_u16(),
        message: error_message(status.as_u16(), &body),
    })
}

/// `{"error": ...}`, then `{"message": ...}`, then the raw non-JSON body,
/// then a generic `HTTP <status>`.
fn error_message(status: u16, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        return parsed
            .error
            .or(parsed.message)
            .filter(|text| !text.is_empty())
            .unwrap_or_else(|| format!("HTTP {status}"));
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        format!("HTTP {status}")
    } else {
        trimmed.to_string()
    }
}

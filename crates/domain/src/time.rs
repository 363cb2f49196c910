//! Time and timestamp helpers.

use chrono::{DateTime, Utc};

/// UTC timestamp used for `created_at`, `updated_at`, notification times, etc.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Render a timestamp the way the console tables display it.
#[must_use]
pub fn display(ts: &Timestamp) -> String {
    ts.to_rfc3339()
}

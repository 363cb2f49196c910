//! Backend location.

use serde::Deserialize;

/// Base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8081";

/// Where the debug backend lives.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Scheme, host and port of the backend, without the `/debug` prefix.
    pub base_url: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl BackendConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Full URL of `/debug/{path}`.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/debug/{path}", self.base_url.trim_end_matches('/'))
    }
}

//! [`DebugApi`] implementation over reqwest.

use serde::Deserialize;

use mistdebug_app::ports::DebugApi;
use mistdebug_domain::draft::CreateRequest;
use mistdebug_domain::error::ConsoleError;
use mistdebug_domain::record::Record;
use mistdebug_domain::resource::ResourceKind;

use crate::config::BackendConfig;
use crate::error::BackendError;
use crate::http::check_response;

/// Confirmation body of delete, seed and reset.
#[derive(Deserialize)]
struct MessageBody {
    #[serde(default)]
    message: String,
}

/// HTTP client for the debug backend.
#[derive(Debug, Clone)]
pub struct ReqwestDebugApi {
    http: reqwest::Client,
    config: BackendConfig,
}

impl ReqwestDebugApi {
    /// Build a client for the backend at `config.base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::Http`] when the underlying client cannot be
    /// built (TLS backend initialisation failure).
    pub fn new(config: BackendConfig) -> Result<Self, BackendError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("mistdebug/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::with_client(http, config))
    }

    /// Use an existing reqwest client.
    #[must_use]
    pub fn with_client(http: reqwest::Client, config: BackendConfig) -> Self {
        Self { http, config }
    }

    async fn fetch_list(&self, kind: ResourceKind) -> Result<Vec<Record>, BackendError> {
        let url = self.config.endpoint(kind.as_str());
        tracing::debug!(%url, "GET");
        let resp = check_response(self.http.get(&url).send().await?).await?;
        let body = resp.bytes().await?;
        Ok(Record::list_from_slice(kind, &body)?)
    }

    async fn post_create(&self, request: &CreateRequest) -> Result<Record, BackendError> {
        let kind = request.kind();
        let url = self.config.endpoint(kind.as_str());
        tracing::debug!(%url, "POST");
        let resp = check_response(self.http.post(&url).json(request).send().await?).await?;
        let body = resp.bytes().await?;
        Ok(Record::from_slice(kind, &body)?)
    }

    async fn send_for_message(&self, req: reqwest::RequestBuilder) -> Result<String, BackendError> {
        let resp = check_response(req.send().await?).await?;
        let body = resp.bytes().await?;
        let parsed: MessageBody = serde_json::from_slice(&body)?;
        Ok(parsed.message)
    }

    async fn delete_collection(&self, kind: ResourceKind) -> Result<String, BackendError> {
        let url = self.config.endpoint(kind.as_str());
        tracing::debug!(%url, "DELETE");
        self.send_for_message(self.http.delete(&url)).await
    }

    async fn post_seed(&self) -> Result<String, BackendError> {
        let url = self.config.endpoint("seed");
        tracing::debug!(%url, "POST");
        self.send_for_message(self.http.post(&url)).await
    }

    async fn delete_reset(&self) -> Result<String, BackendError> {
        let url = self.config.endpoint("reset");
        tracing::debug!(%url, "DELETE");
        self.send_for_message(self.http.delete(&url)).await
    }
}

impl DebugApi for ReqwestDebugApi {
    async fn list(&self, kind: ResourceKind) -> Result<Vec<Record>, ConsoleError> {
        Ok(self.fetch_list(kind).await?)
    }

    async fn create(&self, request: CreateRequest) -> Result<Record, ConsoleError> {
        Ok(self.post_create(&request).await?)
    }

    async fn delete_all(&self, kind: ResourceKind) -> Result<String, ConsoleError> {
        Ok(self.delete_collection(kind).await?)
    }

    async fn seed(&self) -> Result<String, ConsoleError> {
        Ok(self.post_seed().await?)
    }

    async fn reset(&self) -> Result<String, ConsoleError> {
        Ok(self.delete_reset().await?)
    }
}

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;

use crate::config::{Config, API_KEY_VAR};
use crate::error::{Result, ShellbotError};
use crate::models::chat::ChatRequest;

/// Outbound HTTP seam. Implementations POST a JSON body with a bearer token
/// and hand back the full response body as text, whatever the status.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post_json(&self, url: &str, bearer: &str, body: String) -> Result<String>;
}

/// `reqwest`-backed transport.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
}

impl HttpTransport {
    pub fn new(http: reqwest::Client) -> Self {
        Self { http }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new(crate::util::build_http_client())
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post_json(&self, url: &str, bearer: &str, body: String) -> Result<String> {
        let resp = self
            .http
            .post(url)
            .bearer_auth(bearer)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(ShellbotError::Network)?;

        let status = resp.status();
        if !status.is_success() {
            tracing::warn!(%status, "upstream returned non-success status");
        } else {
            tracing::debug!(%status, "upstream responded");
        }

        // Status is not branched on; the parser decides what the body means.
        resp.text().await.map_err(ShellbotError::Network)
    }
}

/// Single-shot chat-completion client.
pub struct ApiClient<'a, T: Transport + ?Sized> {
    transport: &'a T,
    endpoint: String,
    api_key: Option<String>,
}

impl<'a, T: Transport + ?Sized> ApiClient<'a, T> {
    pub fn new(transport: &'a T, endpoint: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            transport,
            endpoint: endpoint.into(),
            api_key,
        }
    }

    pub fn from_config(transport: &'a T, config: &Config) -> Self {
        Self::new(transport, config.endpoint(), config.api_key.clone())
    }

    /// Send `request` and return the raw response body.
    ///
    /// The credential check happens before anything touches the transport.
    pub async fn complete(&self, request: &ChatRequest) -> Result<String> {
        let api_key = self
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or_else(|| {
                ShellbotError::Configuration(format!("{API_KEY_VAR} not set in environment variables"))
            })?;

        let body = serde_json::to_string(request).map_err(ShellbotError::Encoding)?;

        tracing::debug!(
            endpoint = %self.endpoint,
            model = %request.model,
            bytes = body.len(),
            "sending chat completion request"
        );

        let text = self
            .transport
            .post_json(&self.endpoint, api_key, body)
            .await?;
        tracing::debug!(bytes = text.len(), "response body read");
        Ok(text)
    }
}

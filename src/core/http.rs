//! Thin HTTP transport shared by the provider client.

use std::time::Duration;

use tracing::debug;

use super::error::LlmError;
use super::stream::{LineStream, lines};

/// Configuration for the underlying HTTP client.
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Bound on a single request, connect to last body byte.
    pub timeout: Duration,
    pub user_agent: Option<String>,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(60),
            user_agent: None,
        }
    }
}

/// Status and body of a fully read response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub text: String,
}

pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    pub fn new(config: &HttpClientConfig) -> Result<Self, LlmError> {
        let default_ua = format!("ai21-complete/{}", env!("CARGO_PKG_VERSION"));
        let ua = config.user_agent.as_deref().unwrap_or(&default_ua);

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(ua)
            .build()
            .map_err(|e| {
                LlmError::ProviderConfiguration(format!("Failed to build reqwest client: {e}"))
            })?;

        Ok(Self { client })
    }

    /// POST a JSON body and read the whole response as text.
    ///
    /// Non-2xx statuses are not treated as failures here; the caller inspects
    /// the body.
    #[tracing::instrument(name = "http_post_json", skip(self, headers, body), fields(url = %url), err)]
    pub async fn post_json(
        &self,
        url: &str,
        headers: &[(String, String)],
        body: &serde_json::Value,
    ) -> Result<RawResponse, LlmError> {
        let res = self.send(url, headers, body).await?;
        let status = res.status().as_u16();

        let text = res.text().await.map_err(|e| LlmError::Network {
            message: "Failed to read response body".to_string(),
            source: Box::new(e),
        })?;

        debug!(status, bytes = text.len(), "HTTP response read");
        Ok(RawResponse { status, text })
    }

    /// POST a JSON body and hand back the response body as a lazy line stream.
    #[tracing::instrument(name = "http_post_lines", skip(self, headers, body), fields(url = %url), err)]
    pub async fn post_lines(
        &self,
        url: &str,
        headers: &[(String, String)],
        body: &serde_json::Value,
    ) -> Result<LineStream, LlmError> {
        let res = self.send(url, headers, body).await?;
        debug!(status = res.status().as_u16(), "HTTP stream opened");
        Ok(lines(res.bytes_stream()))
    }

    async fn send(
        &self,
        url: &str,
        headers: &[(String, String)],
        body: &serde_json::Value,
    ) -> Result<reqwest::Response, LlmError> {
        let payload = serde_json::to_vec(body).map_err(|e| LlmError::Parse {
            message: "Failed to serialize request body".to_string(),
            source: Box::new(e),
        })?;

        let mut req_builder = self.client.post(url).body(payload);
        for (name, value) in headers {
            req_builder = req_builder.header(name, value);
        }

        req_builder.send().await.map_err(|e| LlmError::Network {
            message: format!("Request to {url} failed"),
            source: Box::new(e),
        })
    }
}

//! Generation endpoint transport

use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;
use url::Url;

use formcase_common::{ClientConfig, Error, GenerationResult, Result};

/// Form field carrying the submitted HTML
pub const HTML_FIELD: &str = "html_text";

/// Sends HTML to the generation endpoint
#[async_trait]
pub trait GenerationTransport: Send + Sync {
    async fn generate(&self, html: &str) -> Result<GenerationResult>;
}

/// HTTP transport posting form-encoded bodies
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    url: Url,
}

impl HttpTransport {
    /// Create a transport for the configured endpoint
    pub fn new(config: &ClientConfig) -> Result<Self> {
        Self::with_url(config.generate_url()?, config.request_timeout())
    }

    /// Create a transport for an explicit generation URL
    pub fn with_url(url: Url, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;
        Ok(Self { client, url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl GenerationTransport for HttpTransport {
    async fn generate(&self, html: &str) -> Result<GenerationResult> {
        debug!("POST {} ({} bytes of HTML)", self.url, html.len());

        let response = self
            .client
            .post(self.url.clone())
            .form(&[(HTML_FIELD, html)])
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;
        debug!("Generation endpoint answered {} ({} bytes)", status, body.len());

        if !status.is_success() {
            return Err(Error::Status {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        GenerationResult::from_slice(&body)
    }
}

/// Pull `{"error": "..."}` out of an error body, falling back to the raw text
fn error_message(body: &[u8]) -> String {
    serde_json::from_slice::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_string))
        .unwrap_or_else(|| String::from_utf8_lossy(body).trim().to_string())
}

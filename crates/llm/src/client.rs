//! Generation Endpoint Client
//!
//! `GenerateClient` wraps one HTTP POST to a configurable generate endpoint
//! and normalizes the reply to plain text. Both the endpoint URL and the
//! model identifier must be configured before the client can be built;
//! everything after that is a single non-streamed request per call.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use super::generator::TextGenerator;
use super::http_client::build_http_client;
use super::types::{GenerateRequest, GenerateResponse, LlmError, LlmResult};

/// Runtime configuration surface for the generation endpoint.
///
/// Both fields are optional at the configuration layer; the client refuses
/// to build until both are present and the URL is well-formed.
#[derive(Debug, Clone, Default)]
pub struct EndpointConfig {
    /// Base URL of the generation endpoint (e.g. "http://localhost:11434")
    pub endpoint: Option<String>,
    /// Model identifier passed with every request
    pub model: Option<String>,
    /// Optional transport-level request timeout
    pub timeout: Option<Duration>,
}

/// Client for the generate API of the configured endpoint.
#[derive(Debug)]
pub struct GenerateClient {
    endpoint: String,
    model: String,
    client: reqwest::Client,
}

impl GenerateClient {
    /// Build a client from the runtime configuration.
    ///
    /// Fails with [`LlmError::NotConfigured`] when the endpoint URL or model
    /// identifier is missing, blank, or not a valid URL - this is the only
    /// point at which configuration is checked, so no later call can run
    /// unconfigured.
    pub fn new(config: EndpointConfig) -> LlmResult<Self> {
        let endpoint = config
            .endpoint
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| LlmError::not_configured("endpoint URL is not set"))?;
        let model = config
            .model
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| LlmError::not_configured("model identifier is not set"))?;

        url::Url::parse(endpoint)
            .map_err(|e| LlmError::not_configured(format!("invalid endpoint URL '{endpoint}': {e}")))?;

        Ok(Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            model: model.to_string(),
            client: build_http_client(config.timeout),
        })
    }

    /// The configured endpoint base URL (used in error messages).
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn generate_url(&self) -> String {
        format!("{}/api/generate", self.endpoint)
    }
}

#[async_trait]
impl TextGenerator for GenerateClient {
    fn model(&self) -> &str {
        &self.model
    }

    async fn generate(&self, prompt: &str, expect_json: bool) -> LlmResult<String> {
        let request = GenerateRequest::new(&self.model, prompt, expect_json);
        debug!(
            model = %self.model,
            prompt_len = prompt.len(),
            expect_json,
            "sending generate request"
        );

        let response = self
            .client
            .post(self.generate_url())
            .json(&request)
            .send()
            .await
            .map_err(|e| LlmError::Connection {
                endpoint: self.endpoint.clone(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Endpoint {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateResponse = response
            .json()
            .await
            .map_err(|e| LlmError::protocol(format!("response body is not JSON: {e}")))?;

        let text = parsed
            .response
            .ok_or_else(|| LlmError::protocol("response is missing the 'response' text field"))?;

        Ok(text.trim().to_string())
    }
}

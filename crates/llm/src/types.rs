//! Generation Endpoint Types
//!
//! Error taxonomy and wire types for the text-generation endpoint.
//!
//! The endpoint speaks a minimal generate API: `POST <endpoint>/api/generate`
//! with a JSON body, replying with a JSON object whose `response` field holds
//! the generated text. Nothing is streamed; the full reply is awaited.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from the generation endpoint and its response parsing.
///
/// None of these are retried; every variant surfaces to the caller as-is.
#[derive(Error, Debug)]
pub enum LlmError {
    /// Endpoint URL or model identifier missing before the first call
    #[error("Generation endpoint not configured: {0}")]
    NotConfigured(String),

    /// Transport failure - the endpoint was unreachable
    #[error("Cannot connect to generation endpoint at {endpoint}: {message}")]
    Connection { endpoint: String, message: String },

    /// The endpoint answered with a non-success HTTP status
    #[error("Generation endpoint error ({status}): {body}")]
    Endpoint { status: u16, body: String },

    /// The response body did not have the expected shape
    #[error("Unexpected response shape from generation endpoint: {0}")]
    Protocol(String),

    /// No JSON value could be extracted from the model's reply
    #[error("Could not parse JSON from model response: {raw}")]
    MalformedResponse { raw: String },
}

/// Result type alias for endpoint errors
pub type LlmResult<T> = Result<T, LlmError>;

impl LlmError {
    /// Create a not-configured error
    pub fn not_configured(msg: impl Into<String>) -> Self {
        Self::NotConfigured(msg.into())
    }

    /// Create a protocol error
    pub fn protocol(msg: impl Into<String>) -> Self {
        Self::Protocol(msg.into())
    }

    /// Create a malformed-response error carrying the raw text for diagnosis
    pub fn malformed(raw: impl Into<String>) -> Self {
        Self::MalformedResponse { raw: raw.into() }
    }
}

/// Request body for the generate API.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest {
    /// Model identifier
    pub model: String,
    /// The full prompt text
    pub prompt: String,
    /// Always false - the client awaits complete responses
    pub stream: bool,
    /// Set to "json" to hint the endpoint into JSON mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

impl GenerateRequest {
    /// Build a request for `model`/`prompt`, optionally hinting JSON mode.
    pub fn new(model: impl Into<String>, prompt: impl Into<String>, expect_json: bool) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            stream: false,
            format: expect_json.then(|| "json".to_string()),
        }
    }
}

/// Response body from the generate API.
///
/// Only the text field is modeled; the endpoint's timing/token metadata is
/// ignored. A missing `response` field is a protocol error.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateResponse {
    /// The generated text
    pub response: Option<String>,
}

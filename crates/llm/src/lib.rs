//! Argus LLM
//!
//! Client for the configurable text-generation endpoint and the response
//! parsing helpers built on top of it:
//! - `TextGenerator` trait - the seam every analysis service depends on
//! - `GenerateClient` - one HTTP POST per call, full (non-streamed) responses
//! - `parse_llm_json` - JSON extraction tolerant of markdown-fenced replies

pub mod client;
pub mod generator;
pub mod http_client;
pub mod json;
pub mod types;

// Re-export main types
pub use client::{EndpointConfig, GenerateClient};
pub use generator::TextGenerator;
pub use http_client::build_http_client;
pub use json::parse_llm_json;
pub use types::{GenerateRequest, GenerateResponse, LlmError, LlmResult};

//! Text Generator Trait
//!
//! Defines the common interface every analysis service depends on.
//! The production implementation is [`crate::client::GenerateClient`];
//! tests substitute scripted implementations.

use async_trait::async_trait;

use super::types::LlmResult;

/// Trait for a text-generation backend.
///
/// Provides a single-call contract: a prompt goes in, the complete generated
/// text comes back. `expect_json` is a hint forwarded to the endpoint when
/// supported; callers still parse the reply themselves.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// The model identifier in use.
    fn model(&self) -> &str;

    /// Generate a completion for `prompt` and return the trimmed text.
    ///
    /// One call, one response. No retries, no streaming; any failure is
    /// surfaced to the caller unchanged.
    async fn generate(&self, prompt: &str, expect_json: bool) -> LlmResult<String>;

    /// Check that the endpoint is reachable and can generate.
    ///
    /// Default issues a minimal one-word generate call.
    async fn health_check(&self) -> LlmResult<()> {
        self.generate("Reply with the single word: ok", false)
            .await
            .map(|_| ())
    }
}

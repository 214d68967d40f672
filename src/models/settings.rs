//! Application Settings
//!
//! The runtime configuration surface: the generation endpoint, the model
//! identifier, and which pipeline configuration `analyze` runs by default.

use serde::{Deserialize, Serialize};

/// Which stage sequence the orchestrator runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineMode {
    /// Fixed local pipeline: linguistic -> inconsistency -> motive -> synthesis
    #[default]
    Fixed,
    /// Model-planned pipeline: planning -> planned steps -> synthesis
    Planned,
}

impl std::fmt::Display for PipelineMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PipelineMode::Fixed => write!(f, "fixed"),
            PipelineMode::Planned => write!(f, "planned"),
        }
    }
}

/// Persisted application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Generation endpoint base URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    /// Model identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Default pipeline configuration
    #[serde(default)]
    pub pipeline: PipelineMode,
}

impl AppConfig {
    /// Validate field formats. Presence of endpoint/model is not required
    /// here - the client refuses to build without them.
    pub fn validate(&self) -> Result<(), String> {
        if let Some(endpoint) = &self.endpoint {
            let endpoint = endpoint.trim();
            if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
                return Err(format!("endpoint must be an http(s) URL, got '{endpoint}'"));
            }
        }
        if let Some(model) = &self.model {
            if model.trim().is_empty() {
                return Err("model identifier must not be blank".to_string());
            }
        }
        Ok(())
    }

    /// Apply a partial update in place.
    pub fn apply_update(&mut self, update: SettingsUpdate) {
        if let Some(endpoint) = update.endpoint {
            self.endpoint = Some(endpoint);
        }
        if let Some(model) = update.model {
            self.model = Some(model);
        }
        if let Some(pipeline) = update.pipeline {
            self.pipeline = pipeline;
        }
    }
}

/// Partial settings update; `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pipeline: Option<PipelineMode>,
}

//! Subjects
//!
//! The person or entity under analysis. A subject exclusively owns its
//! documents and its reports; nothing is shared across subjects.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::document::IngestedDocument;
use super::report::FinalReport;

/// The entity being analyzed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    /// Unique subject id
    pub id: String,
    /// Display name
    pub name: String,
    /// Ingested documents, in ingestion order
    #[serde(default)]
    pub documents: Vec<IngestedDocument>,
    /// Analysis reports, most-recent-first
    #[serde(default)]
    pub reports: Vec<FinalReport>,
}

impl Subject {
    /// Create a subject with a fresh id and no history.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            documents: Vec::new(),
            reports: Vec::new(),
        }
    }
}

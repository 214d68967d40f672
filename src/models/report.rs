//! Reports and Evidence
//!
//! The typed evidence fragments each collector produces, the `Evidence`
//! container that bundles them, and the `FinalReport` record a run of the
//! pipeline fills in stage by stage.
//!
//! Evidence entries cite documents by id/source string - a weak reference,
//! never an ownership link. A cited document can later be removed without
//! invalidating the report text.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use argus_core::progress::{ProgressStep, Stage};

use super::document::DocumentType;

/// A string that some models return as a single sentence and others as a
/// list of phrases.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TextOrList {
    Text(String),
    List(Vec<String>),
}

impl std::fmt::Display for TextOrList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TextOrList::Text(s) => write!(f, "{s}"),
            TextOrList::List(items) => write!(f, "{}", items.join("; ")),
        }
    }
}

/// Result of the linguistic-analysis stage. Exactly one per run; no
/// historical data is consulted to produce it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinguisticAnalysis {
    /// Euphemistic or loaded phrases found in the statement
    pub euphemisms: Vec<String>,
    /// How the statement frames its topic
    pub framing: String,
    /// Plausibility / emotional-language assessment
    #[serde(alias = "plausibility")]
    pub emotional_language: TextOrList,
}

/// Citation back to an ingested document, by id and source string.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceCitation {
    pub document_id: String,
    pub source: String,
    pub date: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub doc_type: Option<DocumentType>,
}

/// A contradiction between the statement and a cited document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InconsistencyFinding {
    #[serde(flatten)]
    pub citation: SourceCitation,
    pub explanation: String,
}

/// A potential financial motive behind the statement.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MotiveFinding {
    #[serde(flatten)]
    pub citation: SourceCitation,
    pub explanation: String,
}

/// One simulated web search result (planned pipeline).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebSearchResult {
    /// The query that produced this result (filled in by the collector)
    #[serde(default)]
    pub query: String,
    pub title: String,
    pub source: String,
    pub date: String,
    pub summary: String,
}

/// One simulated vector-store match (planned pipeline).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VectorSearchResult {
    #[serde(flatten)]
    pub citation: SourceCitation,
    /// The matched passage and why it is relevant
    pub excerpt: String,
}

/// The structured bundle of sub-analyses attached to one report.
///
/// One container serves both pipeline configurations; sections a run never
/// produces stay empty and are omitted from serialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Evidence {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linguistic_analysis: Option<LinguisticAnalysis>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub inconsistency_checks: Vec<InconsistencyFinding>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub motive_checks: Vec<MotiveFinding>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub web_searches: Vec<WebSearchResult>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub vector_searches: Vec<VectorSearchResult>,
}

/// A report record, created at analysis start and mutated in place as the
/// orchestrator reports progress. Logically immutable once the final stage
/// reaches completed or error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalReport {
    /// Unique report id
    pub id: String,
    /// Verbatim user input
    pub original_statement: String,
    /// Synthesized Markdown, empty until synthesis completes
    pub markdown_report: String,
    /// Collected evidence
    pub evidence: Evidence,
    /// One step per declared stage, in declared order
    pub progress: Vec<ProgressStep>,
    /// Creation time
    pub created_at: DateTime<Utc>,
}

impl FinalReport {
    /// Create a report for `statement` with every declared stage pending.
    pub fn new(statement: impl Into<String>, stages: &[Stage]) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            original_statement: statement.into(),
            markdown_report: String::new(),
            evidence: Evidence::default(),
            progress: stages.iter().copied().map(ProgressStep::pending).collect(),
            created_at: Utc::now(),
        }
    }

    /// Whether every step has reached a terminal status (or the run failed
    /// partway, which freezes the remaining steps at pending).
    pub fn is_finished(&self) -> bool {
        self.progress
            .iter()
            .any(|s| s.status == argus_core::progress::StageStatus::Error)
            || self
                .progress
                .iter()
                .all(|s| s.status.is_terminal())
    }
}

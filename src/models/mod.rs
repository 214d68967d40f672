//! Data Models
//!
//! Serializable domain types: subjects, ingested documents, analysis plans,
//! evidence, final reports, and application settings.

pub mod document;
pub mod plan;
pub mod report;
pub mod settings;
pub mod subject;

pub use document::{DocumentStatus, DocumentType, IngestedDocument};
pub use plan::{AnalysisPlan, PlanStep, PlanTool};
pub use report::{
    Evidence, FinalReport, InconsistencyFinding, LinguisticAnalysis, MotiveFinding,
    SourceCitation, TextOrList, VectorSearchResult, WebSearchResult,
};
pub use settings::{AppConfig, PipelineMode, SettingsUpdate};
pub use subject::Subject;

//! Analysis Progress Vocabulary
//!
//! The fixed stage vocabulary of the analysis pipeline and the progress
//! reporting contract between the orchestrator and its caller.
//!
//! Every report carries one [`ProgressStep`] per declared stage. The
//! orchestrator emits exactly two callbacks per stage on the success path
//! (`Running`, then `Completed` with the stage's raw result), in declared
//! order, never interleaved across stages. A failing stage emits `Error`
//! and nothing after it runs; later steps stay `Pending`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A named step of the analysis pipeline.
///
/// The display names are part of the progress contract: callers key their
/// progress lists on them, so they are fixed strings, not derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Plan decomposition (planned pipeline only)
    Planning,
    /// Euphemism/framing analysis of the statement itself
    Linguistic,
    /// Cross-reference against the subject's ingested documents
    Inconsistency,
    /// Financial-motive flags from donation/article records
    Motive,
    /// Simulated web search (planned pipeline only)
    WebSearch,
    /// Simulated vector-store lookup (planned pipeline only)
    VectorSearch,
    /// Final report generation
    Synthesis,
}

impl Stage {
    /// The fixed, user-facing name of this stage.
    pub fn display_name(&self) -> &'static str {
        match self {
            Stage::Planning => "Intake & Planning",
            Stage::Linguistic => "Linguistic Analysis",
            Stage::Inconsistency => "Inconsistency Check",
            Stage::Motive => "Motive & Financial Analysis",
            Stage::WebSearch => "Web Search",
            Stage::VectorSearch => "Local Vector Search",
            Stage::Synthesis => "Synthesis & Reporting",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Status of a single pipeline stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageStatus {
    Pending,
    Running,
    Completed,
    Error,
}

impl StageStatus {
    /// Whether `next` is a legal transition from this status.
    ///
    /// Legal: pending -> running, running -> completed, running -> error.
    pub fn can_transition_to(&self, next: StageStatus) -> bool {
        matches!(
            (self, next),
            (StageStatus::Pending, StageStatus::Running)
                | (StageStatus::Running, StageStatus::Completed)
                | (StageStatus::Running, StageStatus::Error)
        )
    }

    /// Whether this status is terminal for the step.
    pub fn is_terminal(&self) -> bool {
        matches!(self, StageStatus::Completed | StageStatus::Error)
    }
}

impl std::fmt::Display for StageStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StageStatus::Pending => write!(f, "pending"),
            StageStatus::Running => write!(f, "running"),
            StageStatus::Completed => write!(f, "completed"),
            StageStatus::Error => write!(f, "error"),
        }
    }
}

/// Progress record for one declared stage of a report.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressStep {
    /// Stage display name (see [`Stage::display_name`])
    pub name: String,
    /// Current status
    pub status: StageStatus,
    /// The stage's raw result, for display. Set on completion.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl ProgressStep {
    /// Create a pending step for a stage.
    pub fn pending(stage: Stage) -> Self {
        Self {
            name: stage.display_name().to_string(),
            status: StageStatus::Pending,
            details: None,
        }
    }
}

/// Progress callback invoked by the orchestrator at each stage transition.
///
/// Called synchronously, in stage order: `(stage_name, Running, None)` before
/// a stage runs, `(stage_name, Completed, details)` after it returns, or
/// `(stage_name, Error, None)` when it fails.
pub type ProgressFn<'a> = dyn Fn(&str, StageStatus, Option<Value>) + Send + Sync + 'a;

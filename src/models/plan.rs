//! Analysis Plans
//!
//! The planned pipeline asks the model to decompose a statement into an
//! ordered list of tool invocations from a fixed vocabulary. The only
//! non-model control decision in the whole pipeline lives here:
//! linguistic-analysis steps are moved to the front before execution,
//! preserving the relative order of everything else.

use serde::{Deserialize, Serialize};

/// Fixed tool vocabulary the planner may draw from.
///
/// Decoding is strict: a plan naming any other tool fails to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanTool {
    LinguisticAnalysis,
    WebSearch,
    LocalVectorSearch,
}

impl std::fmt::Display for PlanTool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlanTool::LinguisticAnalysis => write!(f, "linguistic_analysis"),
            PlanTool::WebSearch => write!(f, "web_search"),
            PlanTool::LocalVectorSearch => write!(f, "local_vector_search"),
        }
    }
}

/// One planned tool invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanStep {
    pub tool: PlanTool,
    pub query: String,
}

/// An ordered list of planned steps.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisPlan {
    pub steps: Vec<PlanStep>,
}

impl AnalysisPlan {
    /// Reorder so that every linguistic-analysis step runs first.
    ///
    /// Stable partition, not a sort: linguistic steps keep their relative
    /// order among themselves, and so do all remaining steps.
    pub fn prioritized(self) -> Self {
        let (linguistic, rest): (Vec<PlanStep>, Vec<PlanStep>) = self
            .steps
            .into_iter()
            .partition(|s| s.tool == PlanTool::LinguisticAnalysis);

        let mut steps = linguistic;
        steps.extend(rest);
        Self { steps }
    }
}

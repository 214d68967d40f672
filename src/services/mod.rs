//! Analysis services: evidence collectors, planning, synthesis, ingestion,
//! and the orchestrator that sequences them.

pub mod collectors;
pub mod ingestion;
pub mod orchestrator;
pub mod planner;
pub mod synthesizer;

pub use orchestrator::{AnalysisOrchestrator, AnalysisOutcome};

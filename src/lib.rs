//! Argus - Statement Analysis Backend
//!
//! Library backing the `argus` CLI. It includes:
//! - The analysis services (collectors, planner, synthesizer, orchestrator)
//! - The session state store and its JSON persistence
//! - The storage layer for persisted configuration
//! - Data models and utilities

pub mod cli;
pub mod models;
pub mod services;
pub mod state;
pub mod storage;
pub mod utils;

pub use models::settings::{AppConfig, PipelineMode, SettingsUpdate};
pub use services::{AnalysisOrchestrator, AnalysisOutcome};
pub use state::SessionState;
pub use utils::error::{AppError, AppResult};

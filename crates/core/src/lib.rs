//! Argus Core
//!
//! The analysis-progress vocabulary shared across the Argus workspace: the
//! stage names, statuses, and progress reporting contract every layer
//! agrees on. This crate has zero dependencies on application-level code
//! (HTTP clients, CLI, session state).

pub mod progress;

pub use progress::{ProgressFn, ProgressStep, Stage, StageStatus};

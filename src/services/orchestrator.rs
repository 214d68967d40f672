//! Analysis Orchestrator
//!
//! Sequences the collectors and the synthesizer into one analysis run,
//! reporting progress at every stage transition.
//!
//! Two pipeline configurations share this orchestrator:
//! - `Fixed`: Linguistic Analysis -> Inconsistency Check -> Motive &
//!   Financial Analysis -> Synthesis & Reporting
//! - `Planned`: Intake & Planning -> the planned steps, prioritized ->
//!   Synthesis & Reporting
//!
//! Stages run strictly one after another - one suspend point per generate
//! call, no fan-out even when a plan repeats a tool. The first failing stage
//! aborts the rest: its step is reported as error, later stages never start,
//! and the caller gets exactly one consolidated error. No stage is retried
//! and no timeout is enforced here; timeouts belong to the transport layer.
//!
//! Callers must not interleave two runs against the same report record: the
//! progress contract assumes a single writer.

use std::sync::Arc;

use serde_json::Value;
use tracing::{info, warn};

use argus_core::progress::{ProgressFn, Stage, StageStatus};
use argus_llm::TextGenerator;

use crate::models::plan::PlanTool;
use crate::models::report::Evidence;
use crate::models::settings::PipelineMode;
use crate::models::subject::Subject;
use crate::services::collectors::{
    inconsistency, linguistic, motive, vector_search, web_search,
};
use crate::services::{planner, synthesizer};
use crate::utils::error::{AppError, AppResult};

/// What a successful run returns. The caller merges this into the persisted
/// report record and marks every progress step completed.
#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    pub markdown_report: String,
    pub evidence: Evidence,
}

/// Sequences collectors and synthesizer over one generator.
pub struct AnalysisOrchestrator {
    generator: Arc<dyn TextGenerator>,
    mode: PipelineMode,
}

impl AnalysisOrchestrator {
    pub fn new(generator: Arc<dyn TextGenerator>, mode: PipelineMode) -> Self {
        Self { generator, mode }
    }

    /// The stage list a report should be seeded with, all pending.
    ///
    /// The fixed pipeline's stages are known up front. The planned pipeline
    /// only knows its intake stage until the plan exists; planned steps are
    /// appended to the report as they first start running.
    pub fn declared_stages(&self) -> Vec<Stage> {
        match self.mode {
            PipelineMode::Fixed => vec![
                Stage::Linguistic,
                Stage::Inconsistency,
                Stage::Motive,
                Stage::Synthesis,
            ],
            PipelineMode::Planned => vec![Stage::Planning],
        }
    }

    /// Run the full analysis for `statement` against `subject`.
    ///
    /// Emits `(stage, Running)` before each stage and
    /// `(stage, Completed, details)` after it; the two callbacks for a stage
    /// are never interleaved with another stage's.
    pub async fn run_analysis(
        &self,
        subject: &Subject,
        statement: &str,
        on_progress: &ProgressFn<'_>,
    ) -> AppResult<AnalysisOutcome> {
        info!(subject = %subject.name, mode = %self.mode, "starting analysis run");

        let evidence = match self.mode {
            PipelineMode::Fixed => self.run_fixed(subject, statement, on_progress).await?,
            PipelineMode::Planned => self.run_planned(subject, statement, on_progress).await?,
        };

        let markdown_report = {
            let stage = Stage::Synthesis;
            on_progress(stage.display_name(), StageStatus::Running, None);
            match synthesizer::synthesize(&*self.generator, &subject.name, statement, &evidence)
                .await
            {
                Ok(report) => {
                    on_progress(
                        stage.display_name(),
                        StageStatus::Completed,
                        Some(Value::String(report.clone())),
                    );
                    report
                }
                Err(e) => return Err(self.fail_stage(stage, on_progress, e)),
            }
        };

        info!(subject = %subject.name, "analysis run completed");
        Ok(AnalysisOutcome {
            markdown_report,
            evidence,
        })
    }

    /// The fixed local pipeline: three collectors in declared order.
    async fn run_fixed(
        &self,
        subject: &Subject,
        statement: &str,
        on_progress: &ProgressFn<'_>,
    ) -> AppResult<Evidence> {
        let mut evidence = Evidence::default();

        let stage = Stage::Linguistic;
        on_progress(stage.display_name(), StageStatus::Running, None);
        match linguistic::analyze_statement(&*self.generator, statement).await {
            Ok(result) => {
                on_progress(stage.display_name(), StageStatus::Completed, to_details(&result));
                evidence.linguistic_analysis = Some(result);
            }
            Err(e) => return Err(self.fail_stage(stage, on_progress, e)),
        }

        let stage = Stage::Inconsistency;
        on_progress(stage.display_name(), StageStatus::Running, None);
        match inconsistency::check_inconsistencies(
            &*self.generator,
            &subject.name,
            statement,
            &subject.documents,
        )
        .await
        {
            Ok(result) => {
                on_progress(stage.display_name(), StageStatus::Completed, to_details(&result));
                evidence.inconsistency_checks = result;
            }
            Err(e) => return Err(self.fail_stage(stage, on_progress, e)),
        }

        let stage = Stage::Motive;
        on_progress(stage.display_name(), StageStatus::Running, None);
        match motive::check_motives(
            &*self.generator,
            &subject.name,
            statement,
            &subject.documents,
        )
        .await
        {
            Ok(result) => {
                on_progress(stage.display_name(), StageStatus::Completed, to_details(&result));
                evidence.motive_checks = result;
            }
            Err(e) => return Err(self.fail_stage(stage, on_progress, e)),
        }

        Ok(evidence)
    }

    /// The planned pipeline: intake planning, then the planned steps in
    /// prioritized order, each executed and awaited in turn.
    async fn run_planned(
        &self,
        subject: &Subject,
        statement: &str,
        on_progress: &ProgressFn<'_>,
    ) -> AppResult<Evidence> {
        let stage = Stage::Planning;
        on_progress(stage.display_name(), StageStatus::Running, None);
        let plan =
            match planner::generate_plan(&*self.generator, &subject.name, statement).await {
                Ok(plan) => {
                    on_progress(stage.display_name(), StageStatus::Completed, to_details(&plan));
                    plan
                }
                Err(e) => return Err(self.fail_stage(stage, on_progress, e)),
            };

        let mut evidence = Evidence::default();
        for step in &plan.steps {
            match step.tool {
                PlanTool::LinguisticAnalysis => {
                    let stage = Stage::Linguistic;
                    on_progress(stage.display_name(), StageStatus::Running, None);
                    match linguistic::analyze_statement(&*self.generator, statement).await {
                        Ok(result) => {
                            on_progress(
                                stage.display_name(),
                                StageStatus::Completed,
                                to_details(&result),
                            );
                            evidence.linguistic_analysis = Some(result);
                        }
                        Err(e) => return Err(self.fail_stage(stage, on_progress, e)),
                    }
                }
                PlanTool::WebSearch => {
                    let stage = Stage::WebSearch;
                    on_progress(stage.display_name(), StageStatus::Running, None);
                    match web_search::search_web(&*self.generator, &subject.name, &step.query)
                        .await
                    {
                        Ok(result) => {
                            on_progress(
                                stage.display_name(),
                                StageStatus::Completed,
                                to_details(&result),
                            );
                            evidence.web_searches.extend(result);
                        }
                        Err(e) => return Err(self.fail_stage(stage, on_progress, e)),
                    }
                }
                PlanTool::LocalVectorSearch => {
                    let stage = Stage::VectorSearch;
                    on_progress(stage.display_name(), StageStatus::Running, None);
                    match vector_search::search_documents(
                        &*self.generator,
                        &subject.name,
                        &step.query,
                        &subject.documents,
                    )
                    .await
                    {
                        Ok(result) => {
                            on_progress(
                                stage.display_name(),
                                StageStatus::Completed,
                                to_details(&result),
                            );
                            evidence.vector_searches.extend(result);
                        }
                        Err(e) => return Err(self.fail_stage(stage, on_progress, e)),
                    }
                }
            }
        }

        Ok(evidence)
    }

    /// Report the failing stage and build the single consolidated error.
    ///
    /// Nothing after the failing stage runs; later steps stay pending.
    fn fail_stage(&self, stage: Stage, on_progress: &ProgressFn<'_>, err: AppError) -> AppError {
        warn!(stage = %stage, error = %err, "analysis stage failed");
        on_progress(stage.display_name(), StageStatus::Error, None);
        let prefix = match self.mode {
            PipelineMode::Fixed => "Error during local analysis",
            PipelineMode::Planned => "Error during analysis",
        };
        AppError::analysis(format!("{prefix}: {err}"))
    }
}

fn to_details<T: serde::Serialize>(value: &T) -> Option<Value> {
    serde_json::to_value(value).ok()
}

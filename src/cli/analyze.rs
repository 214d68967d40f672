//! `argus analyze`: run the full pipeline for one statement.
//!
//! Builds a fresh session for the invocation, ingests any requested
//! documents, runs the orchestrator, and prints the final Markdown report.
//! The progress callback both prints stage transitions and applies them to
//! the session report, so the partially completed progress list is shown
//! even when a stage fails.

use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Mutex;

use clap::Args;
use serde_json::Value;
use tracing::warn;

use argus_core::progress::StageStatus;

use crate::models::document::DocumentType;
use crate::models::settings::{AppConfig, PipelineMode};
use crate::services::ingestion;
use crate::services::orchestrator::AnalysisOrchestrator;
use crate::state::SessionState;
use crate::utils::error::{AppError, AppResult};

#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Subject the statement is attributed to
    pub subject: String,
    /// The statement to analyze, verbatim
    pub statement: String,
    /// Ingest a local file before analysis, as TYPE:PATH
    /// (e.g. --doc speech:remarks.txt)
    #[arg(long = "doc", value_name = "TYPE:PATH")]
    pub docs: Vec<String>,
    /// Run the automated public-record search before analysis
    #[arg(long)]
    pub search: bool,
    /// Use the model-planned pipeline for this run
    #[arg(long, conflicts_with = "fixed")]
    pub planned: bool,
    /// Use the fixed local pipeline for this run
    #[arg(long)]
    pub fixed: bool,
}

fn parse_doc_arg(raw: &str) -> AppResult<(DocumentType, PathBuf)> {
    let (kind, path) = raw.split_once(':').ok_or_else(|| {
        AppError::validation(format!("--doc expects TYPE:PATH, got '{raw}'"))
    })?;
    let doc_type = DocumentType::from_str(kind)
        .map_err(|e| AppError::validation(format!("--doc: {e}")))?;
    Ok((doc_type, PathBuf::from(path)))
}

pub async fn handle(args: AnalyzeArgs, config: &AppConfig) -> AppResult<()> {
    let generator = super::build_generator(config)?;

    let mut session = SessionState::new();
    let subject_id = session.add_subject(&args.subject)?.id.clone();

    for raw in &args.docs {
        let (doc_type, path) = parse_doc_arg(raw)?;
        let document = ingestion::ingest_file(&args.subject, doc_type, &path)?;
        println!("ingested [{}] {}", document.doc_type, document.source);
        session.add_documents(&subject_id, vec![document])?;
    }

    if args.search {
        let documents = ingestion::search_documents(&*generator, &args.subject).await?;
        println!("automated search ingested {} records", documents.len());
        session.add_documents(&subject_id, documents)?;
    }

    let mode = if args.planned {
        PipelineMode::Planned
    } else if args.fixed {
        PipelineMode::Fixed
    } else {
        config.pipeline
    };

    let orchestrator = AnalysisOrchestrator::new(generator, mode);
    let report_id =
        session.begin_report(&subject_id, &args.statement, &orchestrator.declared_stages())?;
    let subject = session.subject(&subject_id)?.clone();

    // The progress callback needs the session; hand it over for the run.
    let shared = Mutex::new(&mut session);
    let on_progress = |name: &str, status: StageStatus, details: Option<Value>| {
        match status {
            StageStatus::Running => println!("  ... {name}"),
            StageStatus::Completed => println!("  ok  {name}"),
            StageStatus::Error => println!("  ERR {name}"),
            StageStatus::Pending => {}
        }
        let mut guard = match shared.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Err(e) = guard.apply_progress(&subject_id, &report_id, name, status, details) {
            warn!(step = name, error = %e, "progress update rejected");
        }
    };

    println!("analyzing statement for '{}' ({mode} pipeline)", subject.name);
    let outcome = orchestrator
        .run_analysis(&subject, &args.statement, &on_progress)
        .await;
    drop(shared);

    match outcome {
        Ok(outcome) => {
            session.complete_report(
                &subject_id,
                &report_id,
                outcome.markdown_report.clone(),
                outcome.evidence,
            )?;
            println!("\n{}", outcome.markdown_report);
            Ok(())
        }
        Err(e) => {
            session.fail_report(&subject_id, &report_id, &e.to_string())?;
            print_progress(&session, &subject_id, &report_id)?;
            Err(e)
        }
    }
}

/// Print the report's progress list, including steps a failed run left
/// pending.
fn print_progress(session: &SessionState, subject_id: &str, report_id: &str) -> AppResult<()> {
    let report = session.report(subject_id, report_id)?;
    println!("\nrun stopped; progress so far:");
    for step in &report.progress {
        println!("  [{}] {}", step.status, step.name);
    }
    Ok(())
}

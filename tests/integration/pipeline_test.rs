//! Pipeline Integration Tests
//!
//! Drives the orchestrator against a scripted generator and checks the
//! progress contract end to end, including the session bookkeeping a real
//! run performs through the progress callback.

use std::sync::{Arc, Mutex};

use serde_json::Value;

use argus::models::settings::PipelineMode;
use argus::services::AnalysisOrchestrator;
use argus::SessionState;
use argus_core::progress::StageStatus;
use argus_llm::LlmError;

use crate::support::{
    progress_recorder, subject_with_history, ScriptedGenerator, LINGUISTIC_JSON,
};

const SYNTHESIS_MD: &str = "## Summary\nNothing conclusive.\n\n## Detailed Findings\n\n## Potential Agenda\n";

#[tokio::test]
async fn test_fixed_run_emits_running_then_completed_per_stage() {
    let generator = Arc::new(ScriptedGenerator::new(vec![
        Ok(LINGUISTIC_JSON.to_string()),
        Ok(r#"[{"documentId":"d1","source":"congress.gov","date":"2023-11-02","explanation":"Voted to roll back clean water protections."}]"#.to_string()),
        Ok("[]".to_string()),
        Ok(SYNTHESIS_MD.to_string()),
    ]));
    let orchestrator = AnalysisOrchestrator::new(generator, PipelineMode::Fixed);
    let (events, callback) = progress_recorder();

    let outcome = orchestrator
        .run_analysis(
            &subject_with_history(),
            "I have always fought for clean water.",
            &callback,
        )
        .await
        .unwrap();

    assert_eq!(outcome.markdown_report, SYNTHESIS_MD);
    assert_eq!(outcome.evidence.inconsistency_checks.len(), 1);
    assert!(outcome.evidence.motive_checks.is_empty());

    let events = events.lock().unwrap();
    let names: Vec<&str> = events.iter().map(|(n, _, _)| n.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Linguistic Analysis",
            "Linguistic Analysis",
            "Inconsistency Check",
            "Inconsistency Check",
            "Motive & Financial Analysis",
            "Motive & Financial Analysis",
            "Synthesis & Reporting",
            "Synthesis & Reporting",
        ]
    );
    for pair in events.chunks(2) {
        assert_eq!(pair[0].1, StageStatus::Running);
        assert!(pair[0].2.is_none());
        assert_eq!(pair[1].1, StageStatus::Completed);
        assert!(pair[1].2.is_some());
    }
}

#[tokio::test]
async fn test_failed_stage_freezes_later_stages_in_session() {
    // Stage 2 of 4 fails; the session record must show stage 1 completed,
    // stage 2 error, stages 3 and 4 still pending, and exactly one error
    // must surface to the caller.
    let generator = Arc::new(ScriptedGenerator::new(vec![
        Ok(LINGUISTIC_JSON.to_string()),
        Err(LlmError::Endpoint {
            status: 500,
            body: "model crashed".to_string(),
        }),
    ]));
    let orchestrator = AnalysisOrchestrator::new(generator, PipelineMode::Fixed);

    let mut session = SessionState::new();
    let subject_id = session.add_subject("Jane Smith").unwrap().id.clone();
    let report_id = session
        .begin_report(&subject_id, "statement", &orchestrator.declared_stages())
        .unwrap();
    let subject = subject_with_history();

    let shared = Mutex::new(&mut session);
    let callback = |name: &str, status: StageStatus, details: Option<Value>| {
        shared
            .lock()
            .unwrap()
            .apply_progress(&subject_id, &report_id, name, status, details)
            .unwrap();
    };

    let err = orchestrator
        .run_analysis(&subject, "statement", &callback)
        .await
        .unwrap_err();
    drop(shared);

    let message = err.to_string();
    assert!(message.starts_with("Error during local analysis:"));
    assert!(message.contains("500"));

    session.fail_report(&subject_id, &report_id, &message).unwrap();

    let report = session.report(&subject_id, &report_id).unwrap();
    assert!(report.is_finished());
    assert_eq!(report.markdown_report, message);
    let statuses: Vec<StageStatus> = report.progress.iter().map(|s| s.status).collect();
    assert_eq!(
        statuses,
        vec![
            StageStatus::Completed,
            StageStatus::Error,
            StageStatus::Pending,
            StageStatus::Pending,
        ]
    );
}

#[tokio::test]
async fn test_planned_run_discovers_stages_in_session() {
    let plan = r#"[{"tool":"local_vector_search","query":"clean water votes"},
                   {"tool":"linguistic_analysis","query":"the statement"},
                   {"tool":"web_search","query":"jane smith clean water"}]"#;
    let vector_results = r#"[{"documentId":"d1","source":"congress.gov","date":"2023-11-02","excerpt":"Voted yea on the rollback."}]"#;
    let web_results = r#"[{"title":"Rollback vote draws fire","source":"Tribune","date":"2023-11-03","summary":"Coverage of the vote."}]"#;
    let generator = Arc::new(ScriptedGenerator::new(vec![
        Ok(plan.to_string()),
        Ok(LINGUISTIC_JSON.to_string()),
        Ok(vector_results.to_string()),
        Ok(web_results.to_string()),
        Ok(SYNTHESIS_MD.to_string()),
    ]));
    let orchestrator = AnalysisOrchestrator::new(generator, PipelineMode::Planned);

    let mut session = SessionState::new();
    let subject_id = session.add_subject("Jane Smith").unwrap().id.clone();
    let report_id = session
        .begin_report(&subject_id, "statement", &orchestrator.declared_stages())
        .unwrap();
    let subject = subject_with_history();

    let shared = Mutex::new(&mut session);
    let callback = |name: &str, status: StageStatus, details: Option<Value>| {
        shared
            .lock()
            .unwrap()
            .apply_progress(&subject_id, &report_id, name, status, details)
            .unwrap();
    };

    let outcome = orchestrator
        .run_analysis(&subject, "statement", &callback)
        .await
        .unwrap();
    drop(shared);

    // Linguistic work is pulled ahead of the searches regardless of plan order.
    assert!(outcome.evidence.linguistic_analysis.is_some());
    assert_eq!(outcome.evidence.vector_searches.len(), 1);
    assert_eq!(outcome.evidence.web_searches.len(), 1);
    assert_eq!(outcome.evidence.web_searches[0].query, "jane smith clean water");

    session
        .complete_report(
            &subject_id,
            &report_id,
            outcome.markdown_report,
            outcome.evidence,
        )
        .unwrap();

    let report = session.report(&subject_id, &report_id).unwrap();
    let names: Vec<&str> = report.progress.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Intake & Planning",
            "Linguistic Analysis",
            "Local Vector Search",
            "Web Search",
            "Synthesis & Reporting",
        ]
    );
    assert!(report.is_finished());
}

#[tokio::test]
async fn test_unparseable_collector_reply_is_malformed_response() {
    let generator = Arc::new(ScriptedGenerator::new(vec![Ok(
        "I could not find anything useful.".to_string(),
    )]));
    let orchestrator = AnalysisOrchestrator::new(generator, PipelineMode::Fixed);
    let (events, callback) = progress_recorder();

    let err = orchestrator
        .run_analysis(&subject_with_history(), "statement", &callback)
        .await
        .unwrap_err();

    let message = err.to_string();
    assert!(message.starts_with("Error during local analysis:"));
    assert!(message.contains("I could not find anything useful."));

    let events = events.lock().unwrap();
    assert_eq!(events.len(), 2);
    assert_eq!(events[1].1, StageStatus::Error);
}

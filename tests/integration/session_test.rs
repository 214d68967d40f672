//! Session Store Integration Tests
//!
//! Session bookkeeping across subjects, documents, and reports, plus the
//! JSON persistence round trip.

use argus::models::document::{DocumentType, IngestedDocument};
use argus::models::report::Evidence;
use argus::SessionState;
use argus_core::progress::{Stage, StageStatus};

fn fixed_stages() -> Vec<Stage> {
    vec![
        Stage::Linguistic,
        Stage::Inconsistency,
        Stage::Motive,
        Stage::Synthesis,
    ]
}

#[test]
fn test_subject_lifecycle() {
    let mut state = SessionState::new();
    let jane = state.add_subject("Jane Smith").unwrap().id.clone();
    let john = state.add_subject("John Doe").unwrap().id.clone();

    // The latest add is selected.
    assert_eq!(state.selected_subject_id.as_deref(), Some(john.as_str()));

    state.select_subject(&jane).unwrap();
    state.delete_subject(&john).unwrap();
    assert_eq!(state.selected_subject_id.as_deref(), Some(jane.as_str()));
    assert_eq!(state.subjects.len(), 1);

    state.delete_subject(&jane).unwrap();
    assert!(state.selected_subject_id.is_none());
}

#[test]
fn test_deleting_subject_drops_its_reports_but_not_others() {
    let mut state = SessionState::new();
    let jane = state.add_subject("Jane Smith").unwrap().id.clone();
    let john = state.add_subject("John Doe").unwrap().id.clone();
    let jane_report = state.begin_report(&jane, "s1", &fixed_stages()).unwrap();
    state.begin_report(&john, "s2", &fixed_stages()).unwrap();

    state.delete_subject(&john).unwrap();
    assert!(state.report(&jane, &jane_report).is_ok());
    assert!(state.subject(&john).is_err());
}

#[test]
fn test_report_progress_full_run() {
    let mut state = SessionState::new();
    let id = state.add_subject("Jane Smith").unwrap().id.clone();
    let report_id = state.begin_report(&id, "statement", &fixed_stages()).unwrap();

    for stage in fixed_stages() {
        state
            .apply_progress(&id, &report_id, stage.display_name(), StageStatus::Running, None)
            .unwrap();
        state
            .apply_progress(
                &id,
                &report_id,
                stage.display_name(),
                StageStatus::Completed,
                Some(serde_json::json!({"ok": true})),
            )
            .unwrap();
    }
    state
        .complete_report(&id, &report_id, "## Summary".to_string(), Evidence::default())
        .unwrap();

    let report = state.report(&id, &report_id).unwrap();
    assert!(report.is_finished());
    assert!(report.progress.iter().all(|s| s.details.is_some()));
}

#[test]
fn test_finished_report_is_frozen() {
    let mut state = SessionState::new();
    let id = state.add_subject("Jane Smith").unwrap().id.clone();
    let report_id = state.begin_report(&id, "statement", &fixed_stages()).unwrap();

    state
        .apply_progress(&id, &report_id, "Linguistic Analysis", StageStatus::Running, None)
        .unwrap();
    state
        .apply_progress(&id, &report_id, "Linguistic Analysis", StageStatus::Error, None)
        .unwrap();

    // No transition is accepted once a step errored.
    assert!(state
        .apply_progress(&id, &report_id, "Inconsistency Check", StageStatus::Running, None)
        .is_err());
}

#[test]
fn test_documents_and_reports_accumulate_per_subject() {
    let mut state = SessionState::new();
    let id = state.add_subject("Jane Smith").unwrap().id.clone();
    state
        .add_documents(
            &id,
            vec![IngestedDocument::new(
                "Jane Smith",
                DocumentType::Leak,
                "documents.zip",
                "2022-08-15",
                "Internal memo about donor commitments.",
            )],
        )
        .unwrap();
    let report_id = state.begin_report(&id, "statement", &fixed_stages()).unwrap();
    state
        .complete_report(&id, &report_id, "## Summary\nDone.".to_string(), Evidence::default())
        .unwrap();

    let subject = state.subject(&id).unwrap();
    assert_eq!(subject.documents.len(), 1);
    assert_eq!(subject.documents[0].doc_type, DocumentType::Leak);
    let report = state.report(&id, &report_id).unwrap();
    assert_eq!(report.markdown_report, "## Summary\nDone.");
    assert!(report.is_finished());
}

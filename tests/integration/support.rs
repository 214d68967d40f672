//! Shared test fixtures: a scripted generator and a progress recorder.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use argus::models::document::{DocumentType, IngestedDocument};
use argus::models::subject::Subject;
use argus_core::progress::StageStatus;
use argus_llm::{LlmResult, TextGenerator};

/// Replays a scripted queue of generate results, one per call.
pub struct ScriptedGenerator {
    responses: Mutex<VecDeque<LlmResult<String>>>,
}

impl ScriptedGenerator {
    pub fn new(responses: Vec<LlmResult<String>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
        }
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    fn model(&self) -> &str {
        "scripted"
    }

    async fn generate(&self, _prompt: &str, _expect_json: bool) -> LlmResult<String> {
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("script exhausted: more generate calls than scripted responses")
    }
}

pub type ProgressEvent = (String, StageStatus, Option<Value>);

/// A progress callback that records every event it sees.
pub fn progress_recorder() -> (
    Arc<Mutex<Vec<ProgressEvent>>>,
    impl Fn(&str, StageStatus, Option<Value>) + Send + Sync,
) {
    let events: Arc<Mutex<Vec<ProgressEvent>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = events.clone();
    let callback = move |name: &str, status: StageStatus, details: Option<Value>| {
        sink.lock().unwrap().push((name.to_string(), status, details));
    };
    (events, callback)
}

/// A subject with a small document history covering several record kinds.
pub fn subject_with_history() -> Subject {
    let mut subject = Subject::new("Jane Smith");
    subject.documents.push(IngestedDocument::new(
        "Jane Smith",
        DocumentType::Vote,
        "congress.gov",
        "2023-11-02",
        "Voted yea on HR 1234, the clean water act rollback.",
    ));
    subject.documents.push(IngestedDocument::new(
        "Jane Smith",
        DocumentType::Donation,
        "fec.gov",
        "2023-05-01",
        "$5,000 received from Acme Industrial PAC.",
    ));
    subject.documents.push(IngestedDocument::new(
        "Jane Smith",
        DocumentType::Speech,
        "campaign-rally.txt",
        "2024-02-11",
        "I have always fought for clean water in this district.",
    ));
    subject
}

pub const LINGUISTIC_JSON: &str = r#"{"euphemisms":["fought for"],"framing":"environmental champion","emotionalLanguage":"moderate"}"#;

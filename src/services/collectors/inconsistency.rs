//! Inconsistency Check Collector
//!
//! Cross-references the statement against the subject's ingested documents
//! and asks for contradictions, each citing a source document.

use argus_llm::{parse_llm_json, TextGenerator};

use super::{decode_array, document_context};
use crate::models::document::IngestedDocument;
use crate::models::report::InconsistencyFinding;
use crate::utils::error::AppResult;

/// How many documents the prompt consults, unfiltered, in ingestion order.
const HISTORY_LIMIT: usize = 10;

/// The slice of history the check consults: the first 10 documents.
pub fn documents_for_inconsistency(
    documents: &[IngestedDocument],
) -> Vec<&IngestedDocument> {
    documents.iter().take(HISTORY_LIMIT).collect()
}

fn build_prompt(subject_name: &str, statement: &str, history: &[&IngestedDocument]) -> String {
    format!(
        r#"You are a fact-checking assistant with access to a local archive of records about {subject_name}.

Statement under review: "{statement}"

Archived records:
{records}

Find contradictions between the statement and the records. Report AT MOST 2,
each citing the record it contradicts. If there are none, return an empty array.

Respond with ONLY a JSON array, no other text:
[{{"documentId": "...", "source": "...", "date": "...", "explanation": "..."}}]"#,
        records = document_context(history),
    )
}

/// Run the inconsistency check.
///
/// An empty list is a valid outcome, not an error.
pub async fn check_inconsistencies(
    generator: &dyn TextGenerator,
    subject_name: &str,
    statement: &str,
    documents: &[IngestedDocument],
) -> AppResult<Vec<InconsistencyFinding>> {
    let history = documents_for_inconsistency(documents);
    let prompt = build_prompt(subject_name, statement, &history);
    let text = generator.generate(&prompt, true).await?;
    let value = parse_llm_json(&text)?;
    Ok(decode_array(value, &text)?)
}

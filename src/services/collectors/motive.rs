//! Motive & Financial Analysis Collector
//!
//! Looks for financial motives behind the statement, consulting only the
//! subject's donation and article records.

use argus_llm::{parse_llm_json, TextGenerator};

use super::{decode_array, document_context};
use crate::models::document::{DocumentType, IngestedDocument};
use crate::models::report::MotiveFinding;
use crate::utils::error::AppResult;

/// How many financial records the prompt consults after filtering.
const HISTORY_LIMIT: usize = 10;

/// The slice of history the check consults: documents of type donation or
/// article, in original order, truncated after filtering.
pub fn documents_for_motive(documents: &[IngestedDocument]) -> Vec<&IngestedDocument> {
    documents
        .iter()
        .filter(|d| matches!(d.doc_type, DocumentType::Donation | DocumentType::Article))
        .take(HISTORY_LIMIT)
        .collect()
}

fn build_prompt(subject_name: &str, statement: &str, history: &[&IngestedDocument]) -> String {
    format!(
        r#"You are a financial-disclosure analyst reviewing records about {subject_name}.

Statement under review: "{statement}"

Donation and press records:
{records}

Identify potential financial motives behind the statement. Report AT MOST 2,
each citing the record that suggests it. If there are none, return an empty array.

Respond with ONLY a JSON array, no other text:
[{{"documentId": "...", "source": "...", "date": "...", "explanation": "..."}}]"#,
        records = document_context(history),
    )
}

/// Run the motive check.
///
/// An empty list is a valid outcome, not an error.
pub async fn check_motives(
    generator: &dyn TextGenerator,
    subject_name: &str,
    statement: &str,
    documents: &[IngestedDocument],
) -> AppResult<Vec<MotiveFinding>> {
    let history = documents_for_motive(documents);
    let prompt = build_prompt(subject_name, statement, &history);
    let text = generator.generate(&prompt, true).await?;
    let value = parse_llm_json(&text)?;
    Ok(decode_array(value, &text)?)
}

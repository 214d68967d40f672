//! Local Vector Search Collector (planned pipeline)
//!
//! Simulates a vector-store lookup over the subject's ingested documents.
//! No index exists - the documents are embedded in the prompt and the model
//! picks the relevant passages.

use argus_llm::{parse_llm_json, TextGenerator};

use super::{decode_array, document_context};
use crate::models::document::IngestedDocument;
use crate::models::report::VectorSearchResult;
use crate::utils::error::AppResult;

/// How many documents the prompt consults, in ingestion order.
const HISTORY_LIMIT: usize = 10;

fn build_prompt(subject_name: &str, query: &str, history: &[&IngestedDocument]) -> String {
    format!(
        r#"You are a document retrieval system holding an archive about {subject_name}.

Retrieval query: "{query}"

Archived documents:
{records}

Return the most relevant matches, AT MOST 3, each citing the matched document
and quoting the relevant passage with a short note on why it matches.
If nothing matches, return an empty array.

Respond with ONLY a JSON array, no other text:
[{{"documentId": "...", "source": "...", "date": "...", "excerpt": "..."}}]"#,
        records = document_context(history),
    )
}

/// Run one planned vector-store lookup.
///
/// An empty list is a valid outcome, not an error.
pub async fn search_documents(
    generator: &dyn TextGenerator,
    subject_name: &str,
    query: &str,
    documents: &[IngestedDocument],
) -> AppResult<Vec<VectorSearchResult>> {
    let history: Vec<&IngestedDocument> = documents.iter().take(HISTORY_LIMIT).collect();
    let prompt = build_prompt(subject_name, query, &history);
    let text = generator.generate(&prompt, true).await?;
    let value = parse_llm_json(&text)?;
    Ok(decode_array(value, &text)?)
}

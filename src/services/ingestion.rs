//! Document Ingestion
//!
//! Two ways documents enter a subject's archive: reading a local file, or
//! the "automated search" - a generate call instructing the model to report
//! plausible public-record items. The only contract on the automated path is
//! shape: the reply must parse to a JSON array of well-formed records, or
//! the payload is rejected with `UnexpectedFormat`.
//!
//! Searched records are not deduplicated against existing documents.

use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use argus_llm::{parse_llm_json, TextGenerator};

use crate::models::document::{DocumentType, IngestedDocument};
use crate::utils::error::{AppError, AppResult};

/// A record as reported by the automated search, before it gets an id.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchedRecord {
    #[serde(rename = "type")]
    doc_type: DocumentType,
    source: String,
    date: String,
    content: String,
}

fn build_search_prompt(subject_name: &str) -> String {
    format!(
        r#"You are an automated public-records search agent.

Compile 3 to 5 plausible public-record items about {subject_name}: voting
records, campaign donations, speech excerpts, press articles, leaked
documents, or social media posts. Each item needs a record type, a source
(outlet, registry, or URL), a date, and the record's text content.

Respond with ONLY a JSON array, no other text:
[{{"type": "vote|donation|speech|article|leak|tweet|other", "source": "...", "date": "...", "content": "..."}}]"#
    )
}

/// Run the automated document search for a subject.
///
/// Returns indexed documents with fresh ids. Rejects any reply that does not
/// parse to an array of well-formed records.
pub async fn search_documents(
    generator: &dyn TextGenerator,
    subject_name: &str,
) -> AppResult<Vec<IngestedDocument>> {
    let prompt = build_search_prompt(subject_name);
    let text = generator.generate(&prompt, true).await?;
    let value = parse_llm_json(&text)?;

    let documents = materialize_records(value, subject_name)?;
    info!(
        subject = subject_name,
        count = documents.len(),
        "automated search ingested documents"
    );
    Ok(documents)
}

/// Validate an already-parsed payload and turn it into documents.
pub fn materialize_records(value: Value, subject_name: &str) -> AppResult<Vec<IngestedDocument>> {
    let items = match value {
        Value::Array(items) => items,
        _ => {
            return Err(AppError::unexpected_format(
                "automated search payload is not an array",
            ))
        }
    };

    items
        .into_iter()
        .map(|item| {
            let record: SearchedRecord = serde_json::from_value(item).map_err(|e| {
                AppError::unexpected_format(format!("malformed search record: {e}"))
            })?;
            Ok(IngestedDocument::new(
                subject_name,
                record.doc_type,
                record.source,
                record.date,
                record.content,
            ))
        })
        .collect()
}

/// Ingest a local file as a document.
///
/// The filename is the source; the date is today's, since local files carry
/// no reported date.
pub fn ingest_file(
    subject_name: &str,
    doc_type: DocumentType,
    path: &Path,
) -> AppResult<IngestedDocument> {
    let content = std::fs::read_to_string(path)?;
    let source = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let date = chrono::Utc::now().format("%Y-%m-%d").to_string();

    Ok(IngestedDocument::new(
        subject_name, doc_type, source, date, content,
    ))
}

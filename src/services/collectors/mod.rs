//! Evidence Collectors
//!
//! Each collector is a pure function of (context, statement): build a prompt,
//! call the generator, extract the JSON, strict-decode it into a typed
//! evidence fragment. An empty list is a valid, non-error outcome for every
//! list-shaped collector. Nothing here catches errors - every failure bubbles
//! to the orchestrator.
//!
//! The "vector database" and "local model" wording inside the prompts is
//! product narrative only; every collector is an opaque call to the one
//! configured generation endpoint.

pub mod inconsistency;
pub mod linguistic;
pub mod motive;
pub mod vector_search;
pub mod web_search;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use argus_llm::{LlmError, LlmResult};

use crate::models::document::IngestedDocument;

/// Strict-decode an extracted JSON value that must be an array of `T`.
///
/// A non-array value or an item that fails the schema is a malformed
/// response, never a silent coercion; the raw reply text travels with the
/// error for diagnosis.
pub(crate) fn decode_array<T: DeserializeOwned>(value: Value, raw: &str) -> LlmResult<Vec<T>> {
    let items = match value {
        Value::Array(items) => items,
        other => {
            warn!(got = %value_kind(&other), "expected a JSON array from collector prompt");
            return Err(LlmError::malformed(raw));
        }
    };

    items
        .into_iter()
        .map(|item| {
            serde_json::from_value(item).map_err(|e| {
                warn!(error = %e, "collector item failed schema decode");
                LlmError::malformed(raw)
            })
        })
        .collect()
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Render documents into the compact JSON view embedded in prompts:
/// id, source, date, type, and content only.
pub(crate) fn document_context(documents: &[&IngestedDocument]) -> String {
    let view: Vec<Value> = documents
        .iter()
        .map(|d| {
            serde_json::json!({
                "id": d.id,
                "source": d.source,
                "date": d.date,
                "type": d.doc_type,
                "content": d.content,
            })
        })
        .collect();
    serde_json::to_string_pretty(&view).unwrap_or_else(|_| "[]".to_string())
}

//! JSON Extraction
//!
//! Models reply with JSON wrapped in markdown fences, JSON surrounded by
//! prose, or bare JSON, depending on mood. `parse_llm_json` tries a fixed
//! sequence of extraction strategies and returns the first one that parses.

use serde_json::Value;

use super::types::{LlmError, LlmResult};

/// Extract a JSON value from a model reply.
///
/// Strategies, in order - the first candidate that parses wins:
/// 1. a ```json fenced block
/// 2. the outermost bare object (first `{` to last `}`)
/// 3. the outermost bare array (first `[` to last `]`)
/// 4. the whole string
///
/// Fails with [`LlmError::MalformedResponse`] carrying the raw text when no
/// strategy yields valid JSON. Idempotent on already-valid JSON text.
pub fn parse_llm_json(text: &str) -> LlmResult<Value> {
    if let Some(candidate) = fenced_block(text) {
        if let Ok(value) = serde_json::from_str(candidate) {
            return Ok(value);
        }
    }
    if let Some(candidate) = delimited_slice(text, '{', '}') {
        if let Ok(value) = serde_json::from_str(candidate) {
            return Ok(value);
        }
    }
    if let Some(candidate) = delimited_slice(text, '[', ']') {
        if let Ok(value) = serde_json::from_str(candidate) {
            return Ok(value);
        }
    }
    if let Ok(value) = serde_json::from_str(text.trim()) {
        return Ok(value);
    }

    Err(LlmError::malformed(text))
}

/// The contents of the first ```json fence, or any generic fence as a
/// fallback.
fn fenced_block(text: &str) -> Option<&str> {
    if let Some(start) = text.find("```json") {
        let after_fence = &text[start + 7..];
        if let Some(end) = after_fence.find("```") {
            return Some(after_fence[..end].trim());
        }
    }
    if let Some(start) = text.find("```") {
        let after_fence = &text[start + 3..];
        // Skip an optional language tag line
        let after_lang = match after_fence.find('\n') {
            Some(nl) => &after_fence[nl + 1..],
            None => after_fence,
        };
        if let Some(end) = after_lang.find("```") {
            return Some(after_lang[..end].trim());
        }
    }
    None
}

/// Slice from the first `open` to the last `close`, inclusive.
fn delimited_slice(text: &str, open: char, close: char) -> Option<&str> {
    let start = text.find(open)?;
    let end = text.rfind(close)?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_direct_json_is_idempotent() {
        let value = json!({"a": 1, "b": ["x", "y"], "c": {"nested": true}});
        let text = serde_json::to_string(&value).unwrap();
        assert_eq!(parse_llm_json(&text).unwrap(), value);
    }

    #[test]
    fn test_fenced_block_recovered_exactly() {
        let text = "prefix\n```json\n{\"a\":1}\n```\nsuffix";
        assert_eq!(parse_llm_json(text).unwrap(), json!({"a": 1}));
    }

    #[test]
    fn test_generic_fence_without_language_tag() {
        let text = "Here you go:\n```\n[1, 2, 3]\n```";
        assert_eq!(parse_llm_json(text).unwrap(), json!([1, 2, 3]));
    }

    #[test]
    fn test_object_embedded_in_prose() {
        let text = "The analysis is {\"framing\": \"neutral\"} as requested.";
        assert_eq!(parse_llm_json(text).unwrap(), json!({"framing": "neutral"}));
    }

    #[test]
    fn test_array_embedded_in_prose() {
        let text = "Findings: [\"one\", \"two\"] - nothing else.";
        assert_eq!(parse_llm_json(text).unwrap(), json!(["one", "two"]));
    }

    #[test]
    fn test_bare_scalar_parses_directly() {
        assert_eq!(parse_llm_json("  42 ").unwrap(), json!(42));
    }

    #[test]
    fn test_malformed_carries_raw_text() {
        let err = parse_llm_json("no json here at all").unwrap_err();
        match err {
            LlmError::MalformedResponse { raw } => {
                assert_eq!(raw, "no json here at all");
            }
            other => panic!("expected MalformedResponse, got {other:?}"),
        }
    }

    #[test]
    fn test_broken_fence_falls_through_to_object() {
        // Fence contents are invalid, but a valid object follows.
        let text = "```json\nbroken\n```\n{\"ok\": true}";
        assert_eq!(parse_llm_json(text).unwrap(), json!({"ok": true}));
    }
}

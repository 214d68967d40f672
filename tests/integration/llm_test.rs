//! LLM Layer Integration Tests
//!
//! Reply extraction across the formats local models actually produce, and
//! the configuration checks of the generate client.

use argus_llm::{parse_llm_json, EndpointConfig, GenerateClient, LlmError, TextGenerator};

#[test]
fn test_extracts_object_from_chatty_reply() {
    let reply = r#"Sure! Here is the analysis you asked for:

```json
{"euphemisms": ["revenue enhancement"], "framing": "fiscal"}
```

Let me know if you need anything else."#;
    let value = parse_llm_json(reply).unwrap();
    assert_eq!(value["euphemisms"][0], "revenue enhancement");
}

#[test]
fn test_extracts_array_without_fences() {
    let reply =
        "Here are the findings: [{\"documentId\": \"d1\"}, {\"documentId\": \"d2\"}] as requested.";
    let value = parse_llm_json(reply).unwrap();
    assert_eq!(value.as_array().map(Vec::len), Some(2));
}

#[test]
fn test_plain_json_passes_through() {
    let value = parse_llm_json(r#"{"a": 1}"#).unwrap();
    assert_eq!(value["a"], 1);
}

#[test]
fn test_malformed_reply_keeps_raw_text() {
    let err = parse_llm_json("I was unable to comply.").unwrap_err();
    match err {
        LlmError::MalformedResponse { raw } => assert_eq!(raw, "I was unable to comply."),
        other => panic!("expected MalformedResponse, got {other:?}"),
    }
}

#[test]
fn test_client_requires_endpoint_and_model() {
    let err = GenerateClient::new(EndpointConfig::default()).unwrap_err();
    assert!(matches!(err, LlmError::NotConfigured(_)));

    let err = GenerateClient::new(EndpointConfig {
        endpoint: Some("http://localhost:11434".to_string()),
        model: None,
        timeout: None,
    })
    .unwrap_err();
    assert!(matches!(err, LlmError::NotConfigured(_)));
}

#[test]
fn test_configured_client_exposes_model() {
    let client = GenerateClient::new(EndpointConfig {
        endpoint: Some("http://localhost:11434".to_string()),
        model: Some("llama3.2".to_string()),
        timeout: None,
    })
    .unwrap();
    assert_eq!(client.model(), "llama3.2");
}

#[tokio::test]
async fn test_unreachable_endpoint_is_connection_error() {
    // Port 9 (discard) is not listening; the request must fail at transport
    // level and carry the endpoint in the error.
    let client = GenerateClient::new(EndpointConfig {
        endpoint: Some("http://127.0.0.1:9".to_string()),
        model: Some("llama3.2".to_string()),
        timeout: Some(std::time::Duration::from_secs(2)),
    })
    .unwrap();

    let err = client.generate("hello", false).await.unwrap_err();
    match err {
        LlmError::Connection { endpoint, .. } => {
            assert_eq!(endpoint, "http://127.0.0.1:9");
        }
        other => panic!("expected Connection, got {other:?}"),
    }
}

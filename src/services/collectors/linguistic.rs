//! Linguistic Analysis Collector
//!
//! Examines the statement text itself: euphemisms, framing, and emotional
//! language. Consults no historical data.

use argus_llm::{parse_llm_json, LlmError, TextGenerator};
use tracing::warn;

use crate::models::report::LinguisticAnalysis;
use crate::utils::error::AppResult;

fn build_prompt(statement: &str) -> String {
    format!(
        r#"You are a political-language analyst. Analyze the following public statement.

Statement: "{statement}"

Identify:
1. Euphemisms or loaded phrases (exact quotes from the statement).
2. How the statement frames its topic (one or two sentences).
3. The emotional language and overall plausibility of the claim.

Respond with ONLY a JSON object, no other text:
{{"euphemisms": ["..."], "framing": "...", "emotionalLanguage": "..."}}"#
    )
}

/// Run the linguistic analysis for a statement.
///
/// Returns exactly one analysis object; a reply that does not match the
/// schema is a malformed response.
pub async fn analyze_statement(
    generator: &dyn TextGenerator,
    statement: &str,
) -> AppResult<LinguisticAnalysis> {
    let prompt = build_prompt(statement);
    let text = generator.generate(&prompt, true).await?;
    let value = parse_llm_json(&text)?;

    let analysis: LinguisticAnalysis = serde_json::from_value(value).map_err(|e| {
        warn!(error = %e, "linguistic analysis failed schema decode");
        LlmError::malformed(&text)
    })?;

    Ok(analysis)
}

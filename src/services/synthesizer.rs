//! Report Synthesizer
//!
//! Builds one large prompt embedding all collected evidence as pretty-printed
//! JSON and asks for a citation-grounded Markdown report. The raw returned
//! text is the artifact - no JSON parsing on the way out, and any generator
//! error propagates unchanged.

use argus_llm::TextGenerator;

use crate::models::report::Evidence;
use crate::utils::error::AppResult;

fn build_prompt(subject_name: &str, statement: &str, evidence: &Evidence) -> String {
    let evidence_json =
        serde_json::to_string_pretty(evidence).unwrap_or_else(|_| "{}".to_string());

    format!(
        r#"You are writing a neutral analysis report about a public statement by {subject_name}.

Statement: "{statement}"

Collected evidence (JSON):
{evidence_json}

Write a Markdown report grounded ONLY in the evidence above, citing sources
where the evidence provides them. Keep a neutral, factual tone. Use exactly
these three headings:

## Summary
## Detailed Findings
## Potential Agenda"#
    )
}

/// Synthesize the final Markdown report from the collected evidence.
pub async fn synthesize(
    generator: &dyn TextGenerator,
    subject_name: &str,
    statement: &str,
    evidence: &Evidence,
) -> AppResult<String> {
    let prompt = build_prompt(subject_name, statement, evidence);
    Ok(generator.generate(&prompt, false).await?)
}

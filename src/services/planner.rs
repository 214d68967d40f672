//! Plan Generator
//!
//! Asks the model to decompose a statement into an ordered list of tool
//! invocations from the fixed vocabulary, strict-decodes the reply, and
//! applies the deterministic reprioritization from
//! [`AnalysisPlan::prioritized`]. No repair or retry: a plan that does not
//! parse is a malformed response.

use argus_llm::{parse_llm_json, LlmError, TextGenerator};
use tracing::{debug, warn};

use crate::models::plan::{AnalysisPlan, PlanStep};
use crate::utils::error::AppResult;

fn build_prompt(subject_name: &str, statement: &str) -> String {
    format!(
        r#"You are the intake planner of a statement-analysis system investigating {subject_name}.

Statement: "{statement}"

Decompose the investigation into an ordered list of tool invocations.
Available tools:
- "linguistic_analysis": analyze the statement's own language (query: the statement)
- "web_search": search the public web (query: a search phrase)
- "local_vector_search": search the local document archive (query: a retrieval phrase)

Use 2 to 4 steps. Respond with ONLY a JSON array, no other text:
[{{"tool": "...", "query": "..."}}]"#
    )
}

/// Generate the analysis plan for a statement.
///
/// The returned plan is already prioritized: linguistic-analysis steps come
/// first, everything else keeps its planned relative order.
pub async fn generate_plan(
    generator: &dyn TextGenerator,
    subject_name: &str,
    statement: &str,
) -> AppResult<AnalysisPlan> {
    let prompt = build_prompt(subject_name, statement);
    let text = generator.generate(&prompt, true).await?;
    let value = parse_llm_json(&text)?;

    let steps: Vec<PlanStep> = serde_json::from_value(value).map_err(|e| {
        warn!(error = %e, "plan failed schema decode");
        LlmError::malformed(&text)
    })?;

    if steps.is_empty() {
        warn!("planner returned an empty plan");
        return Err(LlmError::malformed(&text).into());
    }

    debug!(step_count = steps.len(), "plan generated");
    Ok(AnalysisPlan { steps }.prioritized())
}

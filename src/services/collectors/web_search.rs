//! Web Search Collector (planned pipeline)
//!
//! Simulates an automated web search for a planned query. The "search" is a
//! prompt; the results are whatever the model reports, typed and cited as
//! synthetic web results.

use argus_llm::{parse_llm_json, TextGenerator};

use super::decode_array;
use crate::models::report::WebSearchResult;
use crate::utils::error::AppResult;

fn build_prompt(subject_name: &str, query: &str) -> String {
    format!(
        r#"You are an automated web search agent researching {subject_name}.

Search query: "{query}"

Report 2 to 3 plausible public web results relevant to the query. Each needs
a headline, the publishing outlet, a date, and a one-paragraph summary.
If nothing plausible exists, return an empty array.

Respond with ONLY a JSON array, no other text:
[{{"title": "...", "source": "...", "date": "...", "summary": "..."}}]"#
    )
}

/// Run one planned web search.
pub async fn search_web(
    generator: &dyn TextGenerator,
    subject_name: &str,
    query: &str,
) -> AppResult<Vec<WebSearchResult>> {
    let prompt = build_prompt(subject_name, query);
    let text = generator.generate(&prompt, true).await?;
    let value = parse_llm_json(&text)?;
    let mut results: Vec<WebSearchResult> = decode_array(value, &text)?;
    for result in &mut results {
        result.query = query.to_string();
    }
    Ok(results)
}

//! `argus search`: automated public-record search for a subject.

use clap::Args;

use crate::models::settings::AppConfig;
use crate::services::ingestion;
use crate::utils::error::AppResult;

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Subject to search public records for
    pub subject: String,
}

pub async fn handle(args: SearchArgs, config: &AppConfig) -> AppResult<()> {
    let generator = super::build_generator(config)?;
    let documents = ingestion::search_documents(&*generator, &args.subject).await?;

    println!("{}", serde_json::to_string_pretty(&documents)?);
    Ok(())
}

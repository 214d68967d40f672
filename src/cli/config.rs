//! `argus config` subcommands.

use clap::Subcommand;

use crate::models::settings::{PipelineMode, SettingsUpdate};
use crate::storage::ConfigService;
use crate::utils::error::AppResult;

#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the current configuration
    Show,
    /// Update one or more settings
    Set {
        /// Generation endpoint base URL, e.g. http://localhost:11434
        #[arg(long)]
        endpoint: Option<String>,
        /// Model identifier, e.g. llama3.2
        #[arg(long)]
        model: Option<String>,
        /// Default pipeline: fixed or planned
        #[arg(long, value_parser = super::parse_pipeline)]
        pipeline: Option<PipelineMode>,
    },
    /// Restore defaults
    Reset,
}

pub fn handle(action: ConfigAction, config: &mut ConfigService) -> AppResult<()> {
    match action {
        ConfigAction::Show => {
            let current = config.get_config();
            println!(
                "endpoint: {}",
                current.endpoint.as_deref().unwrap_or("(not set)")
            );
            println!("model:    {}", current.model.as_deref().unwrap_or("(not set)"));
            println!("pipeline: {}", current.pipeline);
        }
        ConfigAction::Set {
            endpoint,
            model,
            pipeline,
        } => {
            let updated = config.update_config(SettingsUpdate {
                endpoint,
                model,
                pipeline,
            })?;
            println!(
                "config updated: endpoint={}, model={}, pipeline={}",
                updated.endpoint.as_deref().unwrap_or("(not set)"),
                updated.model.as_deref().unwrap_or("(not set)"),
                updated.pipeline
            );
        }
        ConfigAction::Reset => {
            config.reset()?;
            println!("config reset to defaults");
        }
    }
    Ok(())
}

//! Command-Line Interface
//!
//! Clap surface and dispatch. Session state is built per invocation and
//! lives only for the process lifetime; the only thing persisted is the
//! configuration.

use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};

use argus_llm::{EndpointConfig, GenerateClient, TextGenerator};

use crate::models::settings::{AppConfig, PipelineMode};
use crate::storage::ConfigService;
use crate::utils::error::AppResult;

pub mod analyze;
pub mod config;
pub mod search;

/// Statement analysis against a subject's public record.
#[derive(Debug, Parser)]
#[command(name = "argus", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show or change configuration
    Config {
        #[command(subcommand)]
        action: config::ConfigAction,
    },
    /// Search public records for a subject and print the results as JSON
    Search(search::SearchArgs),
    /// Analyze a statement against a subject's record
    Analyze(analyze::AnalyzeArgs),
    /// Check configuration and endpoint reachability
    Health,
}

/// Parse a `--pipeline` / mode value.
pub fn parse_pipeline(value: &str) -> Result<PipelineMode, String> {
    match value.trim().to_ascii_lowercase().as_str() {
        "fixed" => Ok(PipelineMode::Fixed),
        "planned" => Ok(PipelineMode::Planned),
        other => Err(format!("unknown pipeline '{other}', expected fixed or planned")),
    }
}

/// Build the generator from the persisted configuration.
pub fn build_generator(config: &AppConfig) -> AppResult<Arc<dyn TextGenerator>> {
    let client = GenerateClient::new(EndpointConfig {
        endpoint: config.endpoint.clone(),
        model: config.model.clone(),
        timeout: Some(Duration::from_secs(180)),
    })?;
    Ok(Arc::new(client))
}

async fn handle_health(config_service: &ConfigService) -> AppResult<()> {
    if config_service.is_healthy() {
        println!("config:   ok");
    } else {
        println!("config:   invalid or missing");
    }
    let generator = build_generator(config_service.get_config())?;
    match generator.health_check().await {
        Ok(()) => println!("endpoint: ok ({})", generator.model()),
        Err(e) => println!("endpoint: unreachable ({e})"),
    }
    Ok(())
}

/// Dispatch the parsed command.
pub async fn run(cli: Cli) -> AppResult<()> {
    let mut config_service = ConfigService::new()?;

    match cli.command {
        Commands::Config { action } => config::handle(action, &mut config_service),
        Commands::Search(args) => search::handle(args, config_service.get_config()).await,
        Commands::Analyze(args) => analyze::handle(args, config_service.get_config()).await,
        Commands::Health => handle_health(&config_service).await,
    }
}

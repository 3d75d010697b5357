//! CLI module for the live scoreboard
//!
//! Provides subcommands that drive a scoreboard seeded from configuration:
//! - `demo`: play the reference set of matches and print the summary
//! - `play`: run line commands from a script file or stdin

pub mod demo;
pub mod play;

use std::sync::Arc;

use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::info;

use crate::config::AppConfig;
use crate::domain::Match;
use crate::infrastructure::logging;
use crate::infrastructure::services::ScoreboardServiceTrait;

/// Live scoreboard - track scores of matches in progress
#[derive(Parser)]
#[command(name = "scoreboard")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Play the reference matches and print the board summary
    Demo(OutputArgs),

    /// Run scoreboard commands from a script file or stdin
    Play(play::PlayArgs),
}

#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Output format for results
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Load configuration, initialise logging and build a seeded scoreboard
pub async fn bootstrap() -> anyhow::Result<Arc<dyn ScoreboardServiceTrait>> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();
    logging::init_logging(&logging::LoggingConfig::from(&config.logging));

    let service = crate::create_scoreboard(&config.scoreboard).await?;
    info!(
        teams = config.scoreboard.teams.len(),
        "Scoreboard ready"
    );

    Ok(Arc::new(service))
}

/// Render a board summary, one ranked line per match in text mode
pub fn render_summary(summary: &[Match], format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(summary
            .iter()
            .enumerate()
            .map(|(i, game)| format!("{}. {}\n", i + 1, game))
            .collect()),
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(summary)?)),
    }
}

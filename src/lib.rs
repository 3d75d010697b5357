//! Live Scoreboard
//!
//! Tracks the scores of matches in progress on a single shared board:
//! - Start a match between two registered teams
//! - Update its score (scores never go down)
//! - Finish it, removing it from the board
//! - Produce a summary ranked by total score, most recent first on ties

pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use crate::config::AppConfig;

use std::sync::Arc;

use tracing::debug;

use crate::config::ScoreboardConfig;
use domain::DomainError;
use infrastructure::board::InMemoryMatchRepository;
use infrastructure::services::{ScoreboardService, ScoreboardServiceTrait};
use infrastructure::team::InMemoryTeamRepository;

/// Build an in-memory scoreboard with the configured teams pre-registered
pub async fn create_scoreboard(
    config: &ScoreboardConfig,
) -> Result<ScoreboardService<InMemoryMatchRepository, InMemoryTeamRepository>, DomainError> {
    let service = ScoreboardService::new(
        Arc::new(InMemoryMatchRepository::new()),
        Arc::new(InMemoryTeamRepository::new()),
    );

    for name in &config.teams {
        service.register_team(name).await?;
    }

    debug!(teams = config.teams.len(), "Seeded team directory");
    Ok(service)
}

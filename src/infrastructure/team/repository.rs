//! In-memory team repository implementation

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::team::{Team, TeamRepository};
use crate::domain::DomainError;

/// In-memory implementation of TeamRepository
#[derive(Debug)]
pub struct InMemoryTeamRepository {
    teams: Arc<RwLock<Vec<Team>>>,
}

impl InMemoryTeamRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self {
            teams: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Create a repository pre-populated with teams
    pub fn with_teams(teams: impl IntoIterator<Item = Team>) -> Self {
        Self {
            teams: Arc::new(RwLock::new(teams.into_iter().collect())),
        }
    }
}

impl Default for InMemoryTeamRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TeamRepository for InMemoryTeamRepository {
    async fn add(&self, team: Team) -> Result<(), DomainError> {
        let mut teams = self.teams.write().await;
        teams.push(team);
        Ok(())
    }

    async fn get_by_name(&self, name: &str) -> Result<Option<Team>, DomainError> {
        let teams = self.teams.read().await;
        Ok(teams.iter().find(|t| t.name() == name).cloned())
    }

    async fn list(&self) -> Result<Vec<Team>, DomainError> {
        let teams = self.teams.read().await;
        Ok(teams.clone())
    }
}

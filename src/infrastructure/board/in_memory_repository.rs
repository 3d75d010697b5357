//! In-memory match board implementation

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::board::{Match, MatchId, MatchRepository};
use crate::domain::error::DomainError;

/// In-memory implementation of MatchRepository
///
/// Entries are kept in insertion order.
#[derive(Debug)]
pub struct InMemoryMatchRepository {
    matches: Arc<RwLock<Vec<Match>>>,
}

impl InMemoryMatchRepository {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            matches: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl Default for InMemoryMatchRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MatchRepository for InMemoryMatchRepository {
    async fn add(&self, game: Match) -> Result<(), DomainError> {
        let mut matches = self.matches.write().await;
        matches.push(game);
        Ok(())
    }

    async fn get_by_id(&self, id: &MatchId) -> Result<Option<Match>, DomainError> {
        let matches = self.matches.read().await;
        Ok(matches.iter().find(|m| m.id() == id).cloned())
    }

    async fn remove(&self, game: &Match) -> Result<bool, DomainError> {
        let mut matches = self.matches.write().await;

        match matches.iter().position(|m| m.id() == game.id()) {
            Some(index) => {
                matches.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn exists_by_team(&self, team_name: &str) -> Result<bool, DomainError> {
        let matches = self.matches.read().await;
        Ok(matches.iter().any(|m| m.involves(team_name)))
    }

    async fn update_score(
        &self,
        id: &MatchId,
        home_score: i32,
        away_score: i32,
    ) -> Result<Option<Match>, DomainError> {
        let mut matches = self.matches.write().await;

        Ok(matches.iter_mut().find(|m| m.id() == id).map(|m| {
            m.set_scores(home_score, away_score);
            m.clone()
        }))
    }

    async fn list(&self) -> Result<Vec<Match>, DomainError> {
        let matches = self.matches.read().await;
        Ok(matches.clone())
    }

    async fn is_empty(&self) -> Result<bool, DomainError> {
        let matches = self.matches.read().await;
        Ok(matches.is_empty())
    }

    async fn count(&self) -> Result<usize, DomainError> {
        let matches = self.matches.read().await;
        Ok(matches.len())
    }
}

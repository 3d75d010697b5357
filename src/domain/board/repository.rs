//! Match board repository trait

use std::fmt::Debug;

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use super::{Match, MatchId};
use crate::domain::error::DomainError;

/// Repository holding the matches currently in progress
#[cfg_attr(test, automock)]
#[async_trait]
pub trait MatchRepository: Send + Sync + Debug {
    /// Insert a new match. The caller guarantees a fresh ID.
    async fn add(&self, game: Match) -> Result<(), DomainError>;

    /// Get a match by ID
    async fn get_by_id(&self, id: &MatchId) -> Result<Option<Match>, DomainError>;

    /// Remove the entry with the same ID as `game`
    async fn remove(&self, game: &Match) -> Result<bool, DomainError>;

    /// Whether any stored match has this team on either side
    async fn exists_by_team(&self, team_name: &str) -> Result<bool, DomainError>;

    /// Overwrite both scores of a stored match, returning the updated entity
    async fn update_score(
        &self,
        id: &MatchId,
        home_score: i32,
        away_score: i32,
    ) -> Result<Option<Match>, DomainError>;

    /// List all matches. No ordering is guaranteed.
    async fn list(&self) -> Result<Vec<Match>, DomainError>;

    async fn is_empty(&self) -> Result<bool, DomainError>;

    async fn count(&self) -> Result<usize, DomainError>;
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::domain::team::Team;

    /// Helper to create a test match
    pub fn create_test_match(home: &str, away: &str) -> Match {
        Match::new(Team::new(home).unwrap(), Team::new(away).unwrap())
    }

    /// Test suite for MatchRepository implementations
    pub async fn test_repository_basic_lifecycle<R: MatchRepository>(repo: &R) {
        assert!(repo.is_empty().await.expect("is_empty should succeed"));

        // Add
        let game = create_test_match("Brazil", "England");
        let id = game.id().clone();
        repo.add(game.clone()).await.expect("add should succeed");

        assert!(!repo.is_empty().await.unwrap());
        assert_eq!(repo.count().await.unwrap(), 1);

        // Get
        let fetched = repo.get_by_id(&id).await.expect("get should succeed");
        assert_eq!(fetched.as_ref(), Some(&game));

        // Update
        let updated = repo
            .update_score(&id, 2, 1)
            .await
            .expect("update should succeed")
            .expect("match should exist");
        assert_eq!(updated.home_score(), 2);
        assert_eq!(updated.away_score(), 1);
        assert_eq!(updated.created_at(), game.created_at());

        // Verify update persisted
        let fetched = repo.get_by_id(&id).await.unwrap().unwrap();
        assert_eq!(fetched.total_score(), 3);

        // Remove by ID, with a stale copy of the entity
        let removed = repo.remove(&game).await.expect("remove should succeed");
        assert!(removed);
        assert!(repo.get_by_id(&id).await.unwrap().is_none());
        assert!(repo.is_empty().await.unwrap());
    }

    /// Test exists_by_team functionality
    pub async fn test_repository_exists_by_team<R: MatchRepository>(repo: &R) {
        repo.add(create_test_match("Germany", "France")).await.unwrap();

        assert!(repo.exists_by_team("Germany").await.unwrap());
        assert!(repo.exists_by_team("France").await.unwrap());
        assert!(!repo.exists_by_team("Italy").await.unwrap());
        assert!(!repo.exists_by_team("france").await.unwrap());
    }

    /// Unknown IDs resolve to None and leave the board untouched
    pub async fn test_repository_unknown_id<R: MatchRepository>(repo: &R) {
        repo.add(create_test_match("Mexico", "Canada")).await.unwrap();

        let stranger = create_test_match("Spain", "Brazil");

        assert!(repo.get_by_id(stranger.id()).await.unwrap().is_none());
        assert!(repo
            .update_score(stranger.id(), 1, 1)
            .await
            .unwrap()
            .is_none());
        assert!(!repo.remove(&stranger).await.unwrap());
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    /// Remove takes out exactly one entry
    pub async fn test_repository_remove_only_target<R: MatchRepository>(repo: &R) {
        let first = create_test_match("Uruguay", "Italy");
        let second = create_test_match("Argentina", "Australia");

        repo.add(first.clone()).await.unwrap();
        repo.add(second.clone()).await.unwrap();

        assert!(repo.remove(&first).await.unwrap());

        let remaining = repo.list().await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id(), second.id());
    }
}

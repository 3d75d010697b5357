//! Team repository trait

use async_trait::async_trait;

use super::entity::Team;
use crate::domain::DomainError;

/// Directory of known teams
#[async_trait]
pub trait TeamRepository: Send + Sync + std::fmt::Debug {
    /// Register a team. Duplicate names are tolerated.
    async fn add(&self, team: Team) -> Result<(), DomainError>;

    /// Get the first registered team with exactly this name
    async fn get_by_name(&self, name: &str) -> Result<Option<Team>, DomainError>;

    /// List all teams in registration order
    async fn list(&self) -> Result<Vec<Team>, DomainError>;
}

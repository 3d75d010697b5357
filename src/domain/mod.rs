//! Domain layer - Core entities, repository contracts and errors

pub mod board;
pub mod error;
pub mod team;

pub use board::{Match, MatchId, MatchRepository};
pub use error::{DomainError, DomainErrorKind};
pub use team::{validate_team_name, Team, TeamRepository, TeamValidationError};

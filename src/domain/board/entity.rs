//! Match entity and identifier

use std::fmt;

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::domain::team::Team;
use crate::domain::DomainError;

/// Regex pattern for valid match IDs: match-{uuid}
static ID_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^match-[a-f0-9]{8}-[a-f0-9]{4}-[a-f0-9]{4}-[a-f0-9]{4}-[a-f0-9]{12}$")
        .expect("match id pattern is valid")
});

/// Opaque match identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct MatchId(String);

impl MatchId {
    /// Parse a match ID from text
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();

        if !ID_PATTERN.is_match(&id) {
            return Err(DomainError::invalid_argument(format!(
                "Invalid match ID '{}': must be in format match-{{uuid}}",
                id
            )));
        }

        Ok(Self(id))
    }

    /// Generate a fresh match ID
    pub fn generate() -> Self {
        Self(format!("match-{}", uuid::Uuid::new_v4()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<MatchId> for String {
    fn from(id: MatchId) -> Self {
        id.0
    }
}

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A match in progress on the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Match {
    id: MatchId,
    home_team: Team,
    away_team: Team,
    home_score: i32,
    away_score: i32,
    created_at: DateTime<Utc>,
}

impl Match {
    /// Create a new match at 0-0, stamped with the current time
    pub fn new(home_team: Team, away_team: Team) -> Self {
        Self {
            id: MatchId::generate(),
            home_team,
            away_team,
            home_score: 0,
            away_score: 0,
            created_at: Utc::now(),
        }
    }

    /// Override the start timestamp (builder pattern)
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    // Getters

    pub fn id(&self) -> &MatchId {
        &self.id
    }

    pub fn home_team(&self) -> &Team {
        &self.home_team
    }

    pub fn away_team(&self) -> &Team {
        &self.away_team
    }

    pub fn home_score(&self) -> i32 {
        self.home_score
    }

    pub fn away_score(&self) -> i32 {
        self.away_score
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Sum of both scores, widened so that it cannot overflow
    pub fn total_score(&self) -> i64 {
        i64::from(self.home_score) + i64::from(self.away_score)
    }

    /// Whether either side is played by the team with this name
    pub fn involves(&self, team_name: &str) -> bool {
        self.home_team.name() == team_name || self.away_team.name() == team_name
    }

    /// Overwrite both scores. Unchecked; rules live in the scoreboard service.
    pub(crate) fn set_scores(&mut self, home_score: i32, away_score: i32) {
        self.home_score = home_score;
        self.away_score = away_score;
    }
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} - {} {}",
            self.home_team, self.home_score, self.away_team, self.away_score
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team(name: &str) -> Team {
        Team::new(name).unwrap()
    }

    #[test]
    fn test_match_id_generate_is_valid() {
        let id = MatchId::generate();
        assert!(id.as_str().starts_with("match-"));
        assert_eq!(MatchId::new(id.as_str()).unwrap(), id);
    }

    #[test]
    fn test_match_id_invalid() {
        assert!(MatchId::new("").is_err());
        assert!(MatchId::new("match-123").is_err());
        assert!(MatchId::new("op-6f1c1f5e-1111-4c3b-9a0e-6d9f3a2b1c0d").is_err());

        let err = MatchId::new("nope").unwrap_err();
        assert!(err.to_string().contains("Invalid match ID 'nope'"));
    }

    #[test]
    fn test_generated_ids_are_unique() {
        assert_ne!(MatchId::generate(), MatchId::generate());
    }

    #[test]
    fn test_new_match_starts_at_zero() {
        let game = Match::new(team("Brazil"), team("England"));

        assert_eq!(game.home_team().name(), "Brazil");
        assert_eq!(game.away_team().name(), "England");
        assert_eq!(game.home_score(), 0);
        assert_eq!(game.away_score(), 0);
        assert_eq!(game.total_score(), 0);
    }

    #[test]
    fn test_total_score_is_derived() {
        let mut game = Match::new(team("Spain"), team("Brazil"));
        game.set_scores(10, 2);

        assert_eq!(game.total_score(), 12);
        assert_eq!(game.to_string(), "Spain 10 - Brazil 2");
    }

    #[test]
    fn test_total_score_does_not_overflow() {
        let mut game = Match::new(team("Spain"), team("Brazil"));
        game.set_scores(i32::MAX, i32::MAX);

        assert_eq!(game.total_score(), 2 * i64::from(i32::MAX));
    }

    #[test]
    fn test_involves() {
        let game = Match::new(team("Germany"), team("France"));

        assert!(game.involves("Germany"));
        assert!(game.involves("France"));
        assert!(!game.involves("germany"));
        assert!(!game.involves("Italy"));
    }

    #[test]
    fn test_serialization_shape() {
        let game = Match::new(team("Uruguay"), team("Italy"));
        let json = serde_json::to_value(&game).unwrap();

        assert_eq!(json["id"], game.id().as_str());
        assert_eq!(json["home_team"]["name"], "Uruguay");
        assert_eq!(json["away_score"], 0);
    }
}

//! Scoreboard service enforcing the rules of the live board

use std::fmt::Debug;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, info, instrument, warn};

use crate::domain::board::{Match, MatchId, MatchRepository};
use crate::domain::error::DomainError;
use crate::domain::team::{Team, TeamRepository};
use crate::infrastructure::board::InMemoryMatchRepository;
use crate::infrastructure::team::InMemoryTeamRepository;

/// Trait for the scoreboard service (for dynamic dispatch from the CLI)
#[async_trait]
pub trait ScoreboardServiceTrait: Send + Sync + Debug {
    /// Start a new match at 0-0 between two registered teams
    async fn start_match(
        &self,
        home_team_name: &str,
        away_team_name: &str,
    ) -> Result<Match, DomainError>;

    /// Remove a match from the board
    async fn finish_match(&self, game: Option<&Match>) -> Result<(), DomainError>;

    /// Remove the match with this ID from the board, returning it.
    /// Same checks, in the same order, as `finish_match`.
    async fn finish_match_by_id(&self, id: &MatchId) -> Result<Match, DomainError>;

    /// Set the score of a match on the board. Scores never go down.
    async fn update_score(
        &self,
        game: Option<&Match>,
        home_score: i32,
        away_score: i32,
    ) -> Result<Match, DomainError>;

    /// Set the score of the match with this ID.
    /// Same checks, in the same order, as `update_score`.
    async fn update_score_by_id(
        &self,
        id: &MatchId,
        home_score: i32,
        away_score: i32,
    ) -> Result<Match, DomainError>;

    /// All matches on the board, highest total first, most recent first on ties
    async fn board_summary(&self) -> Result<Vec<Match>, DomainError>;

    /// Look up a match on the board by ID
    async fn find_match(&self, id: &MatchId) -> Result<Option<Match>, DomainError>;

    /// Register a team in the directory
    async fn register_team(&self, name: &str) -> Result<Team, DomainError>;

    /// List registered teams
    async fn teams(&self) -> Result<Vec<Team>, DomainError>;
}

/// Scoreboard service implementation
///
/// Every public operation runs under a single operation lock, so the checks
/// and the write that follows them are atomic with respect to other callers.
#[derive(Debug)]
pub struct ScoreboardService<M: MatchRepository, T: TeamRepository> {
    matches: Arc<M>,
    teams: Arc<T>,
    operation_lock: Mutex<()>,
}

impl ScoreboardService<InMemoryMatchRepository, InMemoryTeamRepository> {
    /// Create a service over a fresh, empty in-memory board and directory
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryMatchRepository::new()),
            Arc::new(InMemoryTeamRepository::new()),
        )
    }
}

impl<M: MatchRepository, T: TeamRepository> ScoreboardService<M, T> {
    /// Create a new scoreboard service
    pub fn new(matches: Arc<M>, teams: Arc<T>) -> Self {
        Self {
            matches,
            teams,
            operation_lock: Mutex::new(()),
        }
    }

    /// Resolve a registered team or fail with EntityNotFound
    async fn get_team_required(&self, name: &str) -> Result<Team, DomainError> {
        self.teams
            .get_by_name(name)
            .await?
            .ok_or_else(|| DomainError::entity_not_found("Team", "Name", name))
    }

    /// Get a match from the board or fail with EntityNotFound
    async fn get_match_required(&self, id: &MatchId) -> Result<Match, DomainError> {
        self.matches
            .get_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("The game could not be found in the board."))
    }

    async fn ensure_not_playing(&self, team: &Team) -> Result<(), DomainError> {
        if self.matches.exists_by_team(team.name()).await? {
            return Err(DomainError::team_already_playing(team.name()));
        }

        Ok(())
    }

    async fn try_start_match(
        &self,
        home_team_name: &str,
        away_team_name: &str,
    ) -> Result<Match, DomainError> {
        if home_team_name.is_empty() {
            return Err(DomainError::empty_team_name("homeTeamName"));
        }

        if away_team_name.is_empty() {
            return Err(DomainError::empty_team_name("awayTeamName"));
        }

        if home_team_name == away_team_name {
            return Err(DomainError::invalid_team(format!(
                "The team '{}' cannot play against itself.",
                home_team_name
            )));
        }

        let home_team = self.get_team_required(home_team_name).await?;
        let away_team = self.get_team_required(away_team_name).await?;

        // Home side is reported first when both teams are busy
        self.ensure_not_playing(&home_team).await?;
        self.ensure_not_playing(&away_team).await?;

        let game = Match::new(home_team, away_team);
        self.matches.add(game.clone()).await?;

        Ok(game)
    }

    async fn try_finish_match(&self, game: Option<&Match>) -> Result<Match, DomainError> {
        let game = game.ok_or_else(|| DomainError::missing_argument("match"))?;
        self.try_finish_by_id(game.id()).await
    }

    async fn try_finish_by_id(&self, id: &MatchId) -> Result<Match, DomainError> {
        // Must stay ahead of the lookup: an empty board always reports no matches
        if self.matches.is_empty().await? {
            return Err(DomainError::NoMatchesOnBoard);
        }

        let existing = self.get_match_required(id).await?;
        self.matches.remove(&existing).await?;

        Ok(existing)
    }

    async fn try_update_score(
        &self,
        game: Option<&Match>,
        home_score: i32,
        away_score: i32,
    ) -> Result<Match, DomainError> {
        let game = game.ok_or_else(|| DomainError::missing_argument("match"))?;
        self.try_update_by_id(game.id(), home_score, away_score).await
    }

    async fn try_update_by_id(
        &self,
        id: &MatchId,
        home_score: i32,
        away_score: i32,
    ) -> Result<Match, DomainError> {
        if home_score < 0 || away_score < 0 {
            return Err(DomainError::negative_score());
        }

        let existing = self.get_match_required(id).await?;

        if home_score < existing.home_score() {
            return Err(DomainError::score_decrease(
                "Home Team",
                home_score,
                existing.home_score(),
            ));
        }

        if away_score < existing.away_score() {
            return Err(DomainError::score_decrease(
                "Away Team",
                away_score,
                existing.away_score(),
            ));
        }

        self.matches
            .update_score(existing.id(), home_score, away_score)
            .await?
            .ok_or_else(|| DomainError::not_found("The game could not be found in the board."))
    }

    async fn try_board_summary(&self) -> Result<Vec<Match>, DomainError> {
        let mut games = self.matches.list().await?;

        if games.is_empty() {
            return Err(DomainError::NoMatchesOnBoard);
        }

        // Later insertions first, so that the stable sort below ranks them
        // ahead on fully identical keys.
        games.reverse();
        games.sort_by(|a, b| {
            b.total_score()
                .cmp(&a.total_score())
                .then_with(|| b.created_at().cmp(&a.created_at()))
        });

        Ok(games)
    }
}

fn log_rejection(operation: &'static str, error: &DomainError) {
    warn!(operation, kind = %error.kind(), error = %error, "Scoreboard operation rejected");
}

#[async_trait]
impl<M: MatchRepository, T: TeamRepository> ScoreboardServiceTrait for ScoreboardService<M, T> {
    #[instrument(skip(self))]
    async fn start_match(
        &self,
        home_team_name: &str,
        away_team_name: &str,
    ) -> Result<Match, DomainError> {
        let _guard = self.operation_lock.lock().await;

        let game = self
            .try_start_match(home_team_name, away_team_name)
            .await
            .inspect_err(|e| log_rejection("start_match", e))?;

        info!(match_id = %game.id(), home = %game.home_team(), away = %game.away_team(), "Started match");
        Ok(game)
    }

    #[instrument(skip(self, game))]
    async fn finish_match(&self, game: Option<&Match>) -> Result<(), DomainError> {
        let _guard = self.operation_lock.lock().await;

        let finished = self
            .try_finish_match(game)
            .await
            .inspect_err(|e| log_rejection("finish_match", e))?;

        info!(match_id = %finished.id(), result = %finished, "Finished match");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn finish_match_by_id(&self, id: &MatchId) -> Result<Match, DomainError> {
        let _guard = self.operation_lock.lock().await;

        let finished = self
            .try_finish_by_id(id)
            .await
            .inspect_err(|e| log_rejection("finish_match", e))?;

        info!(match_id = %finished.id(), result = %finished, "Finished match");
        Ok(finished)
    }

    #[instrument(skip(self, game))]
    async fn update_score(
        &self,
        game: Option<&Match>,
        home_score: i32,
        away_score: i32,
    ) -> Result<Match, DomainError> {
        let _guard = self.operation_lock.lock().await;

        let updated = self
            .try_update_score(game, home_score, away_score)
            .await
            .inspect_err(|e| log_rejection("update_score", e))?;

        info!(match_id = %updated.id(), score = %updated, "Updated score");
        Ok(updated)
    }

    #[instrument(skip(self))]
    async fn update_score_by_id(
        &self,
        id: &MatchId,
        home_score: i32,
        away_score: i32,
    ) -> Result<Match, DomainError> {
        let _guard = self.operation_lock.lock().await;

        let updated = self
            .try_update_by_id(id, home_score, away_score)
            .await
            .inspect_err(|e| log_rejection("update_score", e))?;

        info!(match_id = %updated.id(), score = %updated, "Updated score");
        Ok(updated)
    }

    #[instrument(skip(self))]
    async fn board_summary(&self) -> Result<Vec<Match>, DomainError> {
        let _guard = self.operation_lock.lock().await;

        let summary = self
            .try_board_summary()
            .await
            .inspect_err(|e| log_rejection("board_summary", e))?;

        debug!(matches = summary.len(), "Produced board summary");
        Ok(summary)
    }

    #[instrument(skip(self))]
    async fn find_match(&self, id: &MatchId) -> Result<Option<Match>, DomainError> {
        let _guard = self.operation_lock.lock().await;
        self.matches.get_by_id(id).await
    }

    #[instrument(skip(self))]
    async fn register_team(&self, name: &str) -> Result<Team, DomainError> {
        let _guard = self.operation_lock.lock().await;

        let team = Team::new(name)
            .map_err(|e| DomainError::invalid_team(e.to_string()))
            .inspect_err(|e| log_rejection("register_team", e))?;

        self.teams.add(team.clone()).await?;
        debug!(team = %team, "Registered team");

        Ok(team)
    }

    #[instrument(skip(self))]
    async fn teams(&self) -> Result<Vec<Team>, DomainError> {
        let _guard = self.operation_lock.lock().await;
        self.teams.list().await
    }
}

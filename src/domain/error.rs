use thiserror::Error;

/// Core domain errors
///
/// The display output is the bare message so that callers can surface it to
/// users unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("{message}")]
    InvalidArgument { message: String },

    #[error("{message}")]
    InvalidTeam { message: String },

    #[error("{message}")]
    InvalidScore { message: String },

    #[error("{message}")]
    EntityNotFound { message: String },

    #[error("The team '{team}' is already playing in a current game.")]
    TeamAlreadyPlaying { team: String },

    #[error("Currently there are not any games in the board.")]
    NoMatchesOnBoard,

    #[error("Storage error: {message}")]
    Storage { message: String },
}

/// Discriminant of a [`DomainError`], for callers that only branch on the kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DomainErrorKind {
    InvalidArgument,
    InvalidTeam,
    InvalidScore,
    EntityNotFound,
    TeamAlreadyPlaying,
    NoMatchesOnBoard,
    Storage,
}

impl std::fmt::Display for DomainErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument => write!(f, "invalid_argument"),
            Self::InvalidTeam => write!(f, "invalid_team"),
            Self::InvalidScore => write!(f, "invalid_score"),
            Self::EntityNotFound => write!(f, "entity_not_found"),
            Self::TeamAlreadyPlaying => write!(f, "team_already_playing"),
            Self::NoMatchesOnBoard => write!(f, "no_matches_on_board"),
            Self::Storage => write!(f, "storage"),
        }
    }
}

impl DomainError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Error for a required parameter that was not supplied
    pub fn missing_argument(parameter: &str) -> Self {
        Self::invalid_argument(format!("Value cannot be null. (Parameter '{}')", parameter))
    }

    pub fn invalid_team(message: impl Into<String>) -> Self {
        Self::InvalidTeam {
            message: message.into(),
        }
    }

    /// Error for an empty team name argument
    pub fn empty_team_name(parameter: &str) -> Self {
        Self::invalid_team(format!(
            "The '{}' must be non empty and not null.",
            parameter
        ))
    }

    pub fn invalid_score(message: impl Into<String>) -> Self {
        Self::InvalidScore {
            message: message.into(),
        }
    }

    /// Error for a score argument below zero
    pub fn negative_score() -> Self {
        Self::invalid_score("The score must be greater or equal than 0 (zero).")
    }

    /// Error for an update that would lower a recorded score
    pub fn score_decrease(side: &str, attempted: i32, current: i32) -> Self {
        Self::invalid_score(format!(
            "The new score for {} ({}) cannot be less than the actual score ({}).",
            side, attempted, current
        ))
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::EntityNotFound {
            message: message.into(),
        }
    }

    /// Error for a lookup of `entity` by `parameter` that resolved nothing
    pub fn entity_not_found(entity: &str, parameter: &str, value: impl std::fmt::Display) -> Self {
        Self::not_found(format!(
            "Cannot find {} from '{}' = '{}'.",
            entity, parameter, value
        ))
    }

    pub fn team_already_playing(team: impl Into<String>) -> Self {
        Self::TeamAlreadyPlaying { team: team.into() }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    pub fn kind(&self) -> DomainErrorKind {
        match self {
            Self::InvalidArgument { .. } => DomainErrorKind::InvalidArgument,
            Self::InvalidTeam { .. } => DomainErrorKind::InvalidTeam,
            Self::InvalidScore { .. } => DomainErrorKind::InvalidScore,
            Self::EntityNotFound { .. } => DomainErrorKind::EntityNotFound,
            Self::TeamAlreadyPlaying { .. } => DomainErrorKind::TeamAlreadyPlaying,
            Self::NoMatchesOnBoard => DomainErrorKind::NoMatchesOnBoard,
            Self::Storage { .. } => DomainErrorKind::Storage,
        }
    }
}

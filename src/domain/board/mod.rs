//! Match board domain module
//!
//! The board holds the matches currently in progress. A match enters the board
//! when it starts and leaves it when it finishes.

mod entity;
pub mod repository;

pub use entity::{Match, MatchId};
pub use repository::MatchRepository;

#[cfg(test)]
pub use repository::MockMatchRepository;

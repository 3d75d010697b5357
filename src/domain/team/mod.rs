//! Team domain module
//!
//! Teams are referenced by name from matches on the board. The directory has
//! to be seeded before any match can be started.

mod entity;
pub mod repository;
mod validation;

pub use entity::Team;
pub use repository::TeamRepository;
pub use validation::{validate_team_name, TeamValidationError};

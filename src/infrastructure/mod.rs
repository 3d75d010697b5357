//! Infrastructure layer - Repository implementations, services and logging

pub mod board;
pub mod logging;
pub mod services;
pub mod team;

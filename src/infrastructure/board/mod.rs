//! Match board infrastructure implementations

mod in_memory_repository;

pub use in_memory_repository::InMemoryMatchRepository;

//! Infrastructure layer: repository contract and its in-memory engine.

pub mod repository;

pub use repository::{BlockingRepository, InMemoryRepository, Repository};

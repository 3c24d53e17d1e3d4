//! Repository boundary.
//!
//! This module defines the async repository contract, the concurrent
//! in-memory engine implementing it, and a blocking facade for synchronous
//! callers.

pub mod blocking;
pub mod in_memory;
pub mod r#trait;

pub use blocking::BlockingRepository;
pub use in_memory::InMemoryRepository;
pub use r#trait::Repository;

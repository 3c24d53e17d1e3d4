//! `packrat-core`: persistence building blocks.
//!
//! This crate contains **pure** primitives (no IO, no transport): two-phase
//! identifiers, the model and query contracts, the sanitised error type and
//! the result-shaping dispatcher.

pub mod error;
pub mod id;
pub mod model;
pub mod query;
pub mod reply;

pub use error::{ErrorCode, Outcome, StatusCodeError, INTERNAL_MESSAGE};
pub use id::{Id, IdGenerator, SequentialIdGenerator, UuidGenerator};
pub use model::Model;
pub use query::{MatchAll, Predicate, Query};
pub use reply::{Reply, Shape};

//! Result shaping: turns a domain outcome into a transport-neutral reply.
//!
//! The producer of a value states up front what it is returning through
//! [`Shape`]: a collection, the unit marker, or a single value. [`Reply`] is
//! what a transport layer renders; it never carries an error's detail.
//!
//! Dispatch, in priority order:
//!
//! 1. error → [`Reply::Failure`] with the error's code and public message
//! 2. absent (optional contract) → [`Reply::NotFound`]
//! 3. present:
//!    - empty collection → [`Reply::NoContent`]
//!    - non-empty collection → [`Reply::Many`]
//!    - unit → [`Reply::Done`]
//!    - value → [`Reply::One`]

use crate::error::{ErrorCode, Outcome, StatusCodeError};

/// What a successful operation produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape<T> {
    Collection(Vec<T>),
    Unit,
    Value(T),
}

impl<T> From<Vec<T>> for Shape<T> {
    fn from(value: Vec<T>) -> Self {
        Shape::Collection(value)
    }
}

/// Transport-neutral rendering of an outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply<T> {
    /// The operation failed; only the public parts of the error are kept.
    Failure { code: ErrorCode, message: String },
    /// Nothing was found at the requested identifier.
    NotFound,
    /// Success, but the collection matched zero records.
    NoContent,
    /// Success with nothing to return (unit).
    Done,
    /// Success with a non-empty collection.
    Many(Vec<T>),
    /// Success with a single value.
    One(T),
}

impl<T> Reply<T> {
    /// Renders a success-or-error outcome.
    pub fn from_outcome(outcome: Outcome<Shape<T>>) -> Self {
        match outcome {
            Ok(shape) => Self::from_shape(shape),
            Err(err) => Self::from_error(err),
        }
    }

    /// Renders an optional value; `None` means "not found".
    pub fn from_option(option: Option<Shape<T>>) -> Self {
        match option {
            Some(shape) => Self::from_shape(shape),
            None => Reply::NotFound,
        }
    }

    /// Renders a present value.
    pub fn from_shape(shape: Shape<T>) -> Self {
        match shape {
            Shape::Collection(items) if items.is_empty() => Reply::NoContent,
            Shape::Collection(items) => Reply::Many(items),
            Shape::Unit => Reply::Done,
            Shape::Value(value) => Reply::One(value),
        }
    }

    /// Renders an error. The diagnostic projection goes to the log; the
    /// reply keeps code and message only.
    pub fn from_error(err: StatusCodeError) -> Self {
        err.log();
        Reply::Failure {
            code: err.code(),
            message: err.message().to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        !matches!(self, Reply::Failure { .. } | Reply::NotFound)
    }
}

/// Shorthand for an outcome carrying a single value.
pub fn one<T>(outcome: Outcome<T>) -> Reply<T> {
    Reply::from_outcome(outcome.map(Shape::Value))
}

/// Shorthand for an outcome carrying a collection.
pub fn many<T>(outcome: Outcome<Vec<T>>) -> Reply<T> {
    Reply::from_outcome(outcome.map(Shape::Collection))
}

/// Shorthand for an outcome with no payload.
pub fn done<T>(outcome: Outcome<()>) -> Reply<T> {
    Reply::from_outcome(outcome.map(|()| Shape::Unit))
}

//! Model trait: one identifier plus opaque domain fields.

use crate::id::Id;

/// A record stored in a repository.
///
/// The repository only ever looks at the identifier. Everything else is
/// compared by value and copied wholesale on update.
pub trait Model<V>: Clone + PartialEq + core::fmt::Debug + Send + Sync {
    /// Returns the model identifier.
    fn id(&self) -> &Id<V>;

    /// Returns a copy of the model carrying `id` instead of its current identifier.
    ///
    /// Used by repositories to swap a temporary identifier for a permanent one.
    fn with_id(self, id: Id<V>) -> Self;
}

//! Two-phase identifiers: client-supplied placeholders vs store-assigned keys.

use core::fmt;
use core::hash::Hash;
use std::sync::atomic::{AtomicI64, Ordering};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of a model, either temporary (assigned by the caller before the
/// model is stored) or permanent (assigned by a repository on create).
///
/// Exactly one value is carried. Equality and hashing cover the phase as well
/// as the value, so `Id::temporary(1) != Id::permanent(1)`.
///
/// Serialised as `{"temporary": v}` or `{"permanent": v}`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Id<V> {
    Temporary(V),
    Permanent(V),
}

impl<V> Id<V> {
    pub fn temporary(value: V) -> Self {
        Self::Temporary(value)
    }

    pub fn permanent(value: V) -> Self {
        Self::Permanent(value)
    }

    pub fn is_temporary(&self) -> bool {
        matches!(self, Self::Temporary(_))
    }

    pub fn is_permanent(&self) -> bool {
        !self.is_temporary()
    }

    /// The raw value, whichever phase the identifier is in.
    ///
    /// Cannot fail: the enum makes "both" or "neither" unrepresentable.
    pub fn value(&self) -> &V {
        match self {
            Self::Temporary(v) | Self::Permanent(v) => v,
        }
    }

    pub fn into_value(self) -> V {
        match self {
            Self::Temporary(v) | Self::Permanent(v) => v,
        }
    }
}

impl<V: fmt::Display> fmt::Display for Id<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Temporary(v) => write!(f, "temporary:{v}"),
            Self::Permanent(v) => write!(f, "permanent:{v}"),
        }
    }
}

/// Source of fresh, unique raw values for permanent identifiers.
///
/// Shared between concurrent callers, so implementations must never hand out
/// the same value twice.
pub trait IdGenerator<V>: Send + Sync {
    fn next_id(&self) -> V;
}

impl<V, F> IdGenerator<V> for F
where
    F: Fn() -> V + Send + Sync,
{
    fn next_id(&self) -> V {
        self()
    }
}

/// Monotonic counter for integer keys.
///
/// Never wraps. Once `i64::MAX` has been handed out it keeps returning
/// `i64::MAX`, which the repository reports as an id collision.
#[derive(Debug)]
pub struct SequentialIdGenerator {
    next: AtomicI64,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(first: i64) -> Self {
        Self {
            next: AtomicI64::new(first),
        }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator<i64> for SequentialIdGenerator {
    fn next_id(&self) -> i64 {
        match self
            .next
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |n| n.checked_add(1))
        {
            Ok(current) => current,
            Err(exhausted) => exhausted,
        }
    }
}

/// UUIDv7 (time-ordered) keys.
#[derive(Debug, Default, Copy, Clone)]
pub struct UuidGenerator;

impl IdGenerator<Uuid> for UuidGenerator {
    fn next_id(&self) -> Uuid {
        Uuid::now_v7()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    #[test]
    fn temporary_id_reports_temporary() {
        let id = Id::temporary(1);
        assert!(id.is_temporary());
        assert_eq!(*id.value(), 1);
    }

    #[test]
    fn permanent_id_reports_permanent() {
        let id = Id::permanent(2);
        assert!(!id.is_temporary());
        assert!(id.is_permanent());
        assert_eq!(id.into_value(), 2);
    }

    #[test]
    fn phase_is_part_of_equality_and_hash() {
        let temporary = Id::temporary(7);
        let permanent = Id::permanent(7);
        assert_ne!(temporary, permanent);

        let set: HashSet<_> = [temporary, permanent, Id::permanent(7)].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn serialises_with_phase_tag() {
        let json = serde_json::to_value(Id::permanent(3_i64)).unwrap();
        assert_eq!(json, serde_json::json!({ "permanent": 3 }));

        let back: Id<i64> = serde_json::from_value(serde_json::json!({ "temporary": 9 })).unwrap();
        assert_eq!(back, Id::temporary(9));
    }

    #[test]
    fn display_includes_phase() {
        assert_eq!(Id::temporary(4).to_string(), "temporary:4");
        assert_eq!(Id::permanent(4).to_string(), "permanent:4");
    }

    #[test]
    fn closures_are_generators() {
        let generator = || 42_i64;
        assert_eq!(generator.next_id(), 42);
    }

    #[test]
    fn sequential_generator_counts_from_start() {
        let generator = SequentialIdGenerator::starting_at(10);
        assert_eq!(generator.next_id(), 10);
        assert_eq!(generator.next_id(), 11);
    }

    #[test]
    fn sequential_generator_stops_at_max_instead_of_wrapping() {
        let generator = SequentialIdGenerator::starting_at(i64::MAX - 1);
        assert_eq!(generator.next_id(), i64::MAX - 1);
        assert_eq!(generator.next_id(), i64::MAX);
        assert_eq!(generator.next_id(), i64::MAX);
    }

    #[test]
    fn sequential_generator_is_unique_across_threads() {
        let generator = Arc::new(SequentialIdGenerator::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let generator = generator.clone();
                std::thread::spawn(move || (0..250).map(|_| generator.next_id()).collect::<Vec<_>>())
            })
            .collect();

        let mut seen = HashSet::new();
        for handle in handles {
            for id in handle.join().unwrap() {
                assert!(seen.insert(id), "duplicate id {id}");
            }
        }
        assert_eq!(seen.len(), 2000);
    }

    #[test]
    fn uuid_generator_produces_distinct_values() {
        let generator = UuidGenerator;
        assert_ne!(generator.next_id(), generator.next_id());
    }

    proptest! {
        #[test]
        fn value_round_trips_through_either_phase(v in any::<i64>()) {
            prop_assert_eq!(*Id::temporary(v).value(), v);
            prop_assert_eq!(*Id::permanent(v).value(), v);
            prop_assert_ne!(Id::temporary(v), Id::permanent(v));
        }
    }
}

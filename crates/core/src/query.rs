//! Query contract: a pure filter over a snapshot of stored models.

/// Filters a snapshot of models.
///
/// The snapshot is owned by the query: it is a copy taken by the repository,
/// never a live view of the store. Implementations may reorder the result.
pub trait Query<M>: Send + Sync {
    fn filter(&self, snapshot: Vec<M>) -> Vec<M>;
}

impl<M, Q> Query<M> for &Q
where
    Q: Query<M> + ?Sized,
{
    fn filter(&self, snapshot: Vec<M>) -> Vec<M> {
        (**self).filter(snapshot)
    }
}

/// Pass-through query selecting every model.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct MatchAll;

impl<M> Query<M> for MatchAll {
    fn filter(&self, snapshot: Vec<M>) -> Vec<M> {
        snapshot
    }
}

/// Order-preserving query built from a predicate.
#[derive(Debug, Copy, Clone)]
pub struct Predicate<F>(pub F);

impl<M, F> Query<M> for Predicate<F>
where
    F: Fn(&M) -> bool + Send + Sync,
{
    fn filter(&self, snapshot: Vec<M>) -> Vec<M> {
        snapshot.into_iter().filter(|m| (self.0)(m)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn match_all_returns_snapshot_unchanged() {
        assert_eq!(MatchAll.filter(vec![3, 1, 2]), vec![3, 1, 2]);
    }

    #[test]
    fn predicate_keeps_order_of_selected_models() {
        let evens = Predicate(|n: &i32| n % 2 == 0);
        assert_eq!(evens.filter(vec![5, 4, 3, 2, 1, 0]), vec![4, 2, 0]);
    }

    #[test]
    fn queries_work_through_references() {
        let evens = Predicate(|n: &i32| n % 2 == 0);
        let by_ref = &evens;
        assert_eq!(by_ref.filter(vec![1, 2]), vec![2]);
    }
}

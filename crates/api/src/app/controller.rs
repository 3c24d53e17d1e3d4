//! Generic CRUD controller: repository calls in, [`Reply`] values out.

use std::sync::Arc;

use packrat_core::{Id, Model, Query, Reply, reply};
use packrat_infra::Repository;

/// Maps the five HTTP verbs onto a repository.
///
/// Route handlers own request parsing; this type owns the repository call and
/// the shaping of its outcome.
pub struct ModelController<M, V, Q> {
    repo: Arc<dyn Repository<M, V, Q>>,
}

impl<M, V, Q> Clone for ModelController<M, V, Q> {
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
        }
    }
}

impl<M, V, Q> ModelController<M, V, Q>
where
    M: Model<V> + 'static,
    V: Send + Sync + 'static,
    Q: Query<M> + 'static,
{
    pub fn new(repo: Arc<dyn Repository<M, V, Q>>) -> Self {
        Self { repo }
    }

    pub async fn get(&self, id: V) -> Reply<M> {
        reply::one(self.repo.read(&Id::permanent(id)).await)
    }

    pub async fn get_all(&self, query: Q) -> Reply<M> {
        reply::many(self.repo.read_all(Some(&query)).await)
    }

    pub async fn post(&self, model: M) -> Reply<M> {
        reply::one(self.repo.create(model).await)
    }

    pub async fn put(&self, model: M) -> Reply<M> {
        reply::one(self.repo.update(model).await)
    }

    pub async fn delete(&self, id: V) -> Reply<M> {
        reply::done(self.repo.destroy(&Id::permanent(id)).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use packrat_core::{ErrorCode, SequentialIdGenerator};
    use packrat_infra::InMemoryRepository;
    use packrat_packing::{Item, ItemQuery};

    fn controller() -> ModelController<Item, i64, ItemQuery> {
        let repo: InMemoryRepository<Item, i64, ItemQuery> =
            InMemoryRepository::new(SequentialIdGenerator::starting_at(100));
        ModelController::new(Arc::new(repo))
    }

    #[tokio::test]
    async fn post_then_get_returns_created_item() {
        let items = controller();

        let Reply::One(created) = items.post(Item::temporary(1, "tent")).await else {
            panic!("expected created item");
        };
        assert_eq!(created, Item::permanent(100, "tent"));
        assert_eq!(items.get(100).await, Reply::One(created));
    }

    #[tokio::test]
    async fn get_all_distinguishes_empty_from_found() {
        let items = controller();
        assert_eq!(items.get_all(ItemQuery::default()).await, Reply::NoContent);

        items.post(Item::temporary(1, "tent")).await;
        assert_eq!(
            items.get_all(ItemQuery::named("tent")).await,
            Reply::Many(vec![Item::permanent(100, "tent")])
        );
        assert_eq!(items.get_all(ItemQuery::named("stove")).await, Reply::NoContent);
    }

    #[tokio::test]
    async fn get_missing_is_not_found_failure() {
        let reply = controller().get(7).await;
        assert!(matches!(reply, Reply::Failure { code: ErrorCode::NotFound, .. }));
    }

    #[tokio::test]
    async fn put_unknown_item_is_bad_request() {
        let reply = controller().put(Item::permanent(7, "tent")).await;
        assert!(matches!(reply, Reply::Failure { code: ErrorCode::BadRequest, .. }));
    }

    #[tokio::test]
    async fn delete_is_done_even_when_absent() {
        let items = controller();
        assert_eq!(items.delete(7).await, Reply::Done);

        items.post(Item::temporary(1, "tent")).await;
        assert_eq!(items.delete(100).await, Reply::Done);
        assert_eq!(items.delete(100).await, Reply::Done);
    }
}

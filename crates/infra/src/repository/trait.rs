use std::sync::Arc;

use async_trait::async_trait;

use packrat_core::{Id, Model, Outcome, Query};

/// Typed CRUD store for models keyed by two-phase identifiers.
///
/// Every operation returns an explicit [`Outcome`]; domain failures
/// (bad request, not found, internal) never panic across this boundary.
///
/// ## Operation contract
///
/// | Operation | Succeeds with | Fails with |
/// |---|---|---|
/// | `create` | the model under a fresh permanent id | bad request if the id is already permanent |
/// | `read` | the stored model | not found if absent |
/// | `read_all` | a filtered snapshot (all models when `query` is `None`) | never, an empty result is success |
/// | `update` | the model as given, stored verbatim | bad request if the id is temporary or nothing is stored there |
/// | `destroy` | unit | never, destroying an absent id is a no-op |
///
/// Calls may run concurrently. There is no ordering guarantee across calls and
/// no atomicity across more than one model.
#[async_trait]
pub trait Repository<M, V, Q>: Send + Sync {
    async fn create(&self, model: M) -> Outcome<M>;

    async fn read(&self, id: &Id<V>) -> Outcome<M>;

    async fn read_all(&self, query: Option<&Q>) -> Outcome<Vec<M>>;

    async fn update(&self, model: M) -> Outcome<M>;

    async fn destroy(&self, id: &Id<V>) -> Outcome<()>;
}

#[async_trait]
impl<M, V, Q, R> Repository<M, V, Q> for Arc<R>
where
    M: Model<V> + 'static,
    V: Send + Sync + 'static,
    Q: Query<M> + 'static,
    R: Repository<M, V, Q> + ?Sized,
{
    async fn create(&self, model: M) -> Outcome<M> {
        (**self).create(model).await
    }

    async fn read(&self, id: &Id<V>) -> Outcome<M> {
        (**self).read(id).await
    }

    async fn read_all(&self, query: Option<&Q>) -> Outcome<Vec<M>> {
        (**self).read_all(query).await
    }

    async fn update(&self, model: M) -> Outcome<M> {
        (**self).update(model).await
    }

    async fn destroy(&self, id: &Id<V>) -> Outcome<()> {
        (**self).destroy(id).await
    }
}

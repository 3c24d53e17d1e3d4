use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::marker::PhantomData;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use anyhow::anyhow;
use async_trait::async_trait;

use packrat_core::{Id, IdGenerator, Model, Outcome, Query, StatusCodeError};

use super::r#trait::Repository;

/// In-memory repository backed by a lock-guarded map.
///
/// Intended for tests/dev and for deployments where losing the data on
/// restart is acceptable. Each operation is a single mutation under the
/// write lock, so a half-applied change is never observable and an
/// abandoned call leaves the store intact. The lock is never held across an
/// `.await`.
pub struct InMemoryRepository<M, V, Q> {
    id_generator: Arc<dyn IdGenerator<V>>,
    items: RwLock<HashMap<Id<V>, M>>,
    _query: PhantomData<fn(&Q)>,
}

impl<M, V, Q> InMemoryRepository<M, V, Q> {
    pub fn new(id_generator: impl IdGenerator<V> + 'static) -> Self {
        Self::with_shared_generator(Arc::new(id_generator))
    }

    /// Builds a repository drawing ids from a generator shared with others.
    pub fn with_shared_generator(id_generator: Arc<dyn IdGenerator<V>>) -> Self {
        Self {
            id_generator,
            items: RwLock::new(HashMap::new()),
            _query: PhantomData,
        }
    }

    // Every mutation is a single map call, so a panic while the lock is held
    // cannot leave the map half-written. Poisoning is therefore ignored.
    fn read_items(&self) -> RwLockReadGuard<'_, HashMap<Id<V>, M>> {
        self.items.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_items(&self) -> RwLockWriteGuard<'_, HashMap<Id<V>, M>> {
        self.items.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<M, V, Q> core::fmt::Debug for InMemoryRepository<M, V, Q> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let len = self.items.read().map(|m| m.len()).ok();
        f.debug_struct("InMemoryRepository")
            .field("len", &len)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl<M, V, Q> Repository<M, V, Q> for InMemoryRepository<M, V, Q>
where
    M: Model<V> + 'static,
    V: Clone + Eq + Hash + Debug + Send + Sync + 'static,
    Q: Query<M> + 'static,
{
    async fn create(&self, model: M) -> Outcome<M> {
        if model.id().is_permanent() {
            tracing::debug!(id = ?model.id(), "create rejected: id already permanent");
            return Err(StatusCodeError::bad_request("model already has a permanent id"));
        }

        // Caller code runs outside the lock.
        let id = Id::permanent(self.id_generator.next_id());
        let mut items = self.write_items();

        match items.entry(id.clone()) {
            Entry::Occupied(_) => Err(StatusCodeError::internal(anyhow!(
                "id generator returned an id already in use: {id:?}"
            ))),
            Entry::Vacant(slot) => {
                let created = model.with_id(id);
                slot.insert(created.clone());
                tracing::debug!(id = ?created.id(), "model created");
                Ok(created)
            }
        }
    }

    async fn read(&self, id: &Id<V>) -> Outcome<M> {
        self.read_items()
            .get(id)
            .cloned()
            .ok_or_else(|| StatusCodeError::not_found(format!("no model with id {:?}", id.value())))
    }

    async fn read_all(&self, query: Option<&Q>) -> Outcome<Vec<M>> {
        // Copy out and release the lock before running caller code.
        let snapshot: Vec<M> = self.read_items().values().cloned().collect();

        Ok(match query {
            Some(query) => query.filter(snapshot),
            None => snapshot,
        })
    }

    async fn update(&self, model: M) -> Outcome<M> {
        if model.id().is_temporary() {
            tracing::debug!(id = ?model.id(), "update rejected: model never created");
            return Err(StatusCodeError::bad_request("model has not been created yet"));
        }

        let mut items = self.write_items();
        match items.get_mut(model.id()) {
            Some(stored) => {
                *stored = model.clone();
                tracing::debug!(id = ?model.id(), "model updated");
                Ok(model)
            }
            None => {
                tracing::debug!(id = ?model.id(), "update rejected: nothing stored");
                Err(StatusCodeError::bad_request(format!(
                    "no model with id {:?}",
                    model.id().value()
                )))
            }
        }
    }

    async fn destroy(&self, id: &Id<V>) -> Outcome<()> {
        let removed = self.write_items().remove(id).is_some();
        tracing::debug!(id = ?id, removed, "model destroyed");
        Ok(())
    }
}

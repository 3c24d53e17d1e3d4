use std::sync::Arc;

use tokio::runtime::{Builder, Runtime};

use packrat_core::{Id, Model, Outcome, Query};

use super::r#trait::Repository;

/// Synchronous facade over an async [`Repository`].
///
/// Each call is forwarded to the wrapped repository and driven to completion
/// on a private current-thread runtime. There is no second implementation
/// behind this type.
///
/// Must not be called from inside an async runtime (tokio refuses to block a
/// worker thread); use the async repository directly there.
pub struct BlockingRepository<M, V, Q> {
    inner: Arc<dyn Repository<M, V, Q>>,
    runtime: Runtime,
}

impl<M, V, Q> BlockingRepository<M, V, Q>
where
    M: Model<V> + 'static,
    V: Send + Sync + 'static,
    Q: Query<M> + 'static,
{
    pub fn new(inner: Arc<dyn Repository<M, V, Q>>) -> std::io::Result<Self> {
        let runtime = Builder::new_current_thread().build()?;
        Ok(Self { inner, runtime })
    }

    /// The wrapped async repository.
    pub fn inner(&self) -> &Arc<dyn Repository<M, V, Q>> {
        &self.inner
    }

    pub fn create(&self, model: M) -> Outcome<M> {
        self.runtime.block_on(self.inner.create(model))
    }

    pub fn read(&self, id: &Id<V>) -> Outcome<M> {
        self.runtime.block_on(self.inner.read(id))
    }

    pub fn read_all(&self, query: Option<&Q>) -> Outcome<Vec<M>> {
        self.runtime.block_on(self.inner.read_all(query))
    }

    pub fn update(&self, model: M) -> Outcome<M> {
        self.runtime.block_on(self.inner.update(model))
    }

    pub fn destroy(&self, id: &Id<V>) -> Outcome<()> {
        self.runtime.block_on(self.inner.destroy(id))
    }
}

impl<M, V, Q> core::fmt::Debug for BlockingRepository<M, V, Q> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BlockingRepository").finish_non_exhaustive()
    }
}

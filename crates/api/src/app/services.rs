//! Repository wiring for the HTTP layer.

use std::sync::Arc;

use packrat_core::{IdGenerator, SequentialIdGenerator};
use packrat_infra::InMemoryRepository;
use packrat_packing::{Item, ItemQuery, PackingList, PackingListQuery};

use crate::app::controller::ModelController;
use crate::config::ApiConfig;

/// Controllers shared by every route handler.
#[derive(Clone)]
pub struct AppServices {
    pub items: ModelController<Item, i64, ItemQuery>,
    pub packing_lists: ModelController<PackingList, i64, PackingListQuery>,
}

/// In-memory wiring. Both repositories draw from one counter, so an id is
/// never reused across resources.
pub fn build_services(config: &ApiConfig) -> AppServices {
    let ids: Arc<dyn IdGenerator<i64>> =
        Arc::new(SequentialIdGenerator::starting_at(config.first_id));

    let items: InMemoryRepository<Item, i64, ItemQuery> =
        InMemoryRepository::with_shared_generator(ids.clone());
    let packing_lists: InMemoryRepository<PackingList, i64, PackingListQuery> =
        InMemoryRepository::with_shared_generator(ids);

    tracing::info!(first_id = config.first_id, "in-memory repositories ready");

    AppServices {
        items: ModelController::new(Arc::new(items)),
        packing_lists: ModelController::new(Arc::new(packing_lists)),
    }
}

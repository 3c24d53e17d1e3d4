use axum::Router;

pub mod items;
pub mod packing_lists;
pub mod system;

/// Router for all resource endpoints.
pub fn router() -> Router {
    Router::new()
        .nest("/items", items::router())
        .nest("/packing-lists", packing_lists::router())
}

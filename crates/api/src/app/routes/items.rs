use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Extension, Path, Query,
    },
    routing::get,
    Json, Router,
};

use packrat_core::{Reply, StatusCodeError};
use packrat_packing::{Item, ItemQuery};

use crate::app::render::Rendered;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_items).post(create_item))
        .route("/:id", get(get_item).put(update_item).delete(delete_item))
}

pub async fn list_items(
    Extension(services): Extension<Arc<AppServices>>,
    Query(params): Query<HashMap<String, String>>,
) -> Rendered<Item> {
    let query = ItemQuery::from_query_params(&params);
    Rendered(services.items.get_all(query).await)
}

pub async fn get_item(
    Extension(services): Extension<Arc<AppServices>>,
    path: Result<Path<i64>, PathRejection>,
) -> Rendered<Item> {
    let Path(id) = match path {
        Ok(path) => path,
        Err(rejection) => return Rendered::rejected(rejection),
    };
    Rendered(services.items.get(id).await)
}

pub async fn create_item(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<Item>, JsonRejection>,
) -> Rendered<Item> {
    let Json(item) = match body {
        Ok(body) => body,
        Err(rejection) => return Rendered::rejected(rejection),
    };
    Rendered(services.items.post(item).await)
}

pub async fn update_item(
    Extension(services): Extension<Arc<AppServices>>,
    path: Result<Path<i64>, PathRejection>,
    body: Result<Json<Item>, JsonRejection>,
) -> Rendered<Item> {
    let Path(id) = match path {
        Ok(path) => path,
        Err(rejection) => return Rendered::rejected(rejection),
    };
    let Json(item) = match body {
        Ok(body) => body,
        Err(rejection) => return Rendered::rejected(rejection),
    };
    if *item.id.value() != id {
        return Rendered(Reply::from_error(StatusCodeError::bad_request(
            "path id does not match item id",
        )));
    }
    Rendered(services.items.put(item).await)
}

pub async fn delete_item(
    Extension(services): Extension<Arc<AppServices>>,
    path: Result<Path<i64>, PathRejection>,
) -> Rendered<Item> {
    let Path(id) = match path {
        Ok(path) => path,
        Err(rejection) => return Rendered::rejected(rejection),
    };
    Rendered(services.items.delete(id).await)
}

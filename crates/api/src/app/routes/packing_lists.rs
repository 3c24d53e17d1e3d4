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
use packrat_packing::{PackingList, PackingListQuery};

use crate::app::render::Rendered;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_packing_lists).post(create_packing_list))
        .route(
            "/:id",
            get(get_packing_list)
                .put(update_packing_list)
                .delete(delete_packing_list),
        )
}

pub async fn list_packing_lists(
    Extension(services): Extension<Arc<AppServices>>,
    Query(params): Query<HashMap<String, String>>,
) -> Rendered<PackingList> {
    let query = PackingListQuery::from_query_params(&params);
    Rendered(services.packing_lists.get_all(query).await)
}

pub async fn get_packing_list(
    Extension(services): Extension<Arc<AppServices>>,
    path: Result<Path<i64>, PathRejection>,
) -> Rendered<PackingList> {
    let Path(id) = match path {
        Ok(path) => path,
        Err(rejection) => return Rendered::rejected(rejection),
    };
    Rendered(services.packing_lists.get(id).await)
}

pub async fn create_packing_list(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<PackingList>, JsonRejection>,
) -> Rendered<PackingList> {
    let Json(list) = match body {
        Ok(body) => body,
        Err(rejection) => return Rendered::rejected(rejection),
    };
    Rendered(services.packing_lists.post(list).await)
}

pub async fn update_packing_list(
    Extension(services): Extension<Arc<AppServices>>,
    path: Result<Path<i64>, PathRejection>,
    body: Result<Json<PackingList>, JsonRejection>,
) -> Rendered<PackingList> {
    let Path(id) = match path {
        Ok(path) => path,
        Err(rejection) => return Rendered::rejected(rejection),
    };
    let Json(list) = match body {
        Ok(body) => body,
        Err(rejection) => return Rendered::rejected(rejection),
    };
    if *list.id.value() != id {
        return Rendered(Reply::from_error(StatusCodeError::bad_request(
            "path id does not match packing list id",
        )));
    }
    Rendered(services.packing_lists.put(list).await)
}

pub async fn delete_packing_list(
    Extension(services): Extension<Arc<AppServices>>,
    path: Result<Path<i64>, PathRejection>,
) -> Rendered<PackingList> {
    let Path(id) = match path {
        Ok(path) => path,
        Err(rejection) => return Rendered::rejected(rejection),
    };
    Rendered(services.packing_lists.delete(id).await)
}

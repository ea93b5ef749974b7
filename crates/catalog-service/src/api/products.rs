use crate::api::ApiError;
use crate::model::{Product, ProductId};
use crate::queries::ProductQuery;
use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use repository_framework::EntityQuery;
use serde::Deserialize;

/// Query string of `/Products/search`.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub query: Option<String>,
}

pub fn router(products: ProductQuery) -> Router {
    Router::new()
        .route("/Products", get(all))
        .route("/Products/search", get(search))
        .route("/Products/category/{category}", get(by_category))
        .route("/Products/{id}", get(by_id))
        .with_state(products)
}

pub async fn all(State(products): State<ProductQuery>) -> Json<Vec<Product>> {
    Json(products.all())
}

pub async fn by_id(
    State(products): State<ProductQuery>,
    Path(id): Path<ProductId>,
) -> Result<Json<Product>, ApiError> {
    Ok(Json(products.by_id(id)?))
}

pub async fn by_category(
    State(products): State<ProductQuery>,
    Path(category): Path<String>,
) -> Json<Vec<Product>> {
    Json(products.by_category(&category))
}

pub async fn search(
    State(products): State<ProductQuery>,
    Query(params): Query<SearchParams>,
) -> Json<Vec<Product>> {
    Json(products.search(params.query.as_deref()))
}

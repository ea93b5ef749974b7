//! # HTTP API
//!
//! Read-only JSON routes over the catalog. Each entity kind has its own router whose
//! state is that entity's query translator; [`router`] merges them.
//!
//! | Method | Path | Query |
//! |--------|------|-------|
//! | GET | `/Products` | [`ProductQuery::all`](repository_framework::EntityQuery::all) |
//! | GET | `/Products/{id}` | [`ProductQuery::by_id`](repository_framework::EntityQuery::by_id) |
//! | GET | `/Products/category/{category}` | [`ProductQuery::by_category`] |
//! | GET | `/Products/search?query=` | [`ProductQuery::search`] |
//! | GET | `/Users` | [`UserQuery::all`](repository_framework::EntityQuery::all) |
//! | GET | `/Users/{id}` | [`UserQuery::by_id`](repository_framework::EntityQuery::by_id) |
//! | GET | `/Users/department/{department}` | [`UserQuery::by_department`] |
//! | GET | `/Users/active` | [`UserQuery::active`] |
//!
//! Missing ids answer `404` with `{"message": "..."}`. Filters that match nothing
//! answer `200` with `[]`.

pub mod error;
pub mod products;
pub mod users;

pub use error::*;

use crate::queries::{ProductQuery, UserQuery};
use axum::Router;

pub fn router(product_query: ProductQuery, user_query: UserQuery) -> Router {
    Router::new()
        .merge(products::router(product_query))
        .merge(users::router(user_query))
}

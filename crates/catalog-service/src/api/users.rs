use crate::api::ApiError;
use crate::model::{User, UserId};
use crate::queries::UserQuery;
use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use repository_framework::EntityQuery;

pub fn router(users: UserQuery) -> Router {
    Router::new()
        .route("/Users", get(all))
        .route("/Users/active", get(active))
        .route("/Users/department/{department}", get(by_department))
        .route("/Users/{id}", get(by_id))
        .with_state(users)
}

pub async fn all(State(users): State<UserQuery>) -> Json<Vec<User>> {
    Json(users.all())
}

pub async fn by_id(
    State(users): State<UserQuery>,
    Path(id): Path<UserId>,
) -> Result<Json<User>, ApiError> {
    Ok(Json(users.by_id(id)?))
}

pub async fn by_department(
    State(users): State<UserQuery>,
    Path(department): Path<String>,
) -> Json<Vec<User>> {
    Json(users.by_department(&department))
}

pub async fn active(State(users): State<UserQuery>) -> Json<Vec<User>> {
    Json(users.active())
}

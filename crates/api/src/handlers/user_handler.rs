//! User handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};

use common::AppResult;
use domain::{CreateUser, User};

use super::{collection_routes, find_or_not_found};
use crate::extractors::JsonPayload;
use crate::state::AppState;

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    collection_routes("/users", get(list_users).post(create_user))
        .route("/users/:id", get(get_user))
}

/// Create a user
#[utoipa::path(
    post,
    path = "/users/",
    tag = "Users",
    request_body = CreateUser,
    responses(
        (status = 200, description = "User created", body = User),
        (status = 422, description = "Malformed payload")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    JsonPayload(payload): JsonPayload<CreateUser>,
) -> AppResult<Json<User>> {
    let user = state.stores.users().create(payload).await?;
    Ok(Json(user))
}

/// List all users in creation order
#[utoipa::path(
    get,
    path = "/users/",
    tag = "Users",
    responses(
        (status = 200, description = "All users", body = Vec<User>)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<User>>> {
    let users = state.stores.users().list().await?;
    Ok(Json(users))
}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User", body = User),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<User>> {
    let user = find_or_not_found(state.stores.users().as_ref(), &id).await?;
    Ok(Json(user))
}

//! HTTP request handlers.

pub mod card_handler;
pub mod deck_handler;
pub mod health_handler;
pub mod user_handler;

pub use card_handler::card_routes;
pub use deck_handler::deck_routes;
pub use health_handler::system_routes;
pub use user_handler::user_routes;

use axum::{routing::MethodRouter, Router};

use common::{AppResult, OptionExt};
use domain::Entity;
use store::Repository;

use crate::state::AppState;

/// Mount collection routes on both `prefix` and `prefix/`.
fn collection_routes(prefix: &str, methods: MethodRouter<AppState>) -> Router<AppState> {
    Router::new()
        .route(prefix, methods.clone())
        .route(&format!("{}/", prefix), methods)
}

/// Look up an entity by id, turning absence into the resource's 404.
async fn find_or_not_found<E: Entity>(repo: &dyn Repository<E>, id: &str) -> AppResult<E> {
    repo.get(id).await?.ok_or_not_found(E::not_found_message())
}

//! Root and health check handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::Serialize;
use utoipa::ToSchema;

use domain::ROOT_MESSAGE;

use crate::state::AppState;

/// Static message payload.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Porcana backend")]
    pub message: String,
}

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stores: Option<StoreCounts>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Number of entities held by each store.
#[derive(Debug, Serialize, ToSchema)]
pub struct StoreCounts {
    pub users: usize,
    pub decks: usize,
    pub cards: usize,
}

/// Create root and health routes.
pub fn system_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
}

/// Liveness greeting
#[utoipa::path(
    get,
    path = "/",
    tag = "System",
    responses(
        (status = 200, description = "Service is up", body = MessageResponse)
    )
)]
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: ROOT_MESSAGE.to_string(),
    })
}

/// Health check endpoint - reports store sizes.
#[utoipa::path(
    get,
    path = "/health",
    tag = "System",
    responses(
        (status = 200, description = "All stores reachable", body = HealthResponse),
        (status = 503, description = "A store failed", body = HealthResponse)
    )
)]
pub async fn health_check(State(state): State<AppState>) -> Response {
    let (users, decks, cards) = (
        state.stores.users(),
        state.stores.decks(),
        state.stores.cards(),
    );

    match tokio::try_join!(users.count(), decks.count(), cards.count()) {
        Ok((users, decks, cards)) => {
            let response = HealthResponse {
                status: "healthy".to_string(),
                stores: Some(StoreCounts {
                    users,
                    decks,
                    cards,
                }),
                error: None,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            let response = HealthResponse {
                status: "unhealthy".to_string(),
                stores: None,
                error: Some(e.to_string()),
            };
            (StatusCode::SERVICE_UNAVAILABLE, Json(response)).into_response()
        }
    }
}

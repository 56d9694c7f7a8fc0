//! Card handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};

use common::AppResult;
use domain::{Card, CreateCard};

use super::{collection_routes, find_or_not_found};
use crate::extractors::JsonPayload;
use crate::state::AppState;

/// Create card routes
pub fn card_routes() -> Router<AppState> {
    collection_routes("/cards", get(list_cards).post(create_card))
        .route("/cards/:id", get(get_card))
}

/// Create a card
///
/// `deck_id` is stored as given; it is not checked against existing decks.
#[utoipa::path(
    post,
    path = "/cards/",
    tag = "Cards",
    request_body = CreateCard,
    responses(
        (status = 200, description = "Card created", body = Card),
        (status = 422, description = "Malformed payload")
    )
)]
pub async fn create_card(
    State(state): State<AppState>,
    JsonPayload(payload): JsonPayload<CreateCard>,
) -> AppResult<Json<Card>> {
    let card = state.stores.cards().create(payload).await?;
    Ok(Json(card))
}

#[utoipa::path(
    get,
    path = "/cards/",
    tag = "Cards",
    responses(
        (status = 200, description = "All cards", body = Vec<Card>)
    )
)]
pub async fn list_cards(State(state): State<AppState>) -> AppResult<Json<Vec<Card>>> {
    let cards = state.stores.cards().list().await?;
    Ok(Json(cards))
}

#[utoipa::path(
    get,
    path = "/cards/{id}",
    tag = "Cards",
    params(
        ("id" = String, Path, description = "Card ID")
    ),
    responses(
        (status = 200, description = "Card", body = Card),
        (status = 404, description = "Card not found")
    )
)]
pub async fn get_card(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Card>> {
    let card = find_or_not_found(state.stores.cards().as_ref(), &id).await?;
    Ok(Json(card))
}

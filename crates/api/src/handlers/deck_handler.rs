//! Deck handlers, including deck-code decoding.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::{get, post},
    Router,
};

use common::AppResult;
use domain::{decode_deck_code, CreateDeck, Deck, DeckCode, DecodedDeck};

use super::{collection_routes, find_or_not_found};
use crate::extractors::JsonPayload;
use crate::state::AppState;

/// Create deck routes
pub fn deck_routes() -> Router<AppState> {
    collection_routes("/decks", get(list_decks).post(create_deck))
        .route("/decks/decode", post(decode_deck))
        .route("/decks/:id", get(get_deck))
}

/// Create a deck
///
/// `user_id` is stored as given; it is not checked against existing users.
#[utoipa::path(
    post,
    path = "/decks/",
    tag = "Decks",
    request_body = CreateDeck,
    responses(
        (status = 200, description = "Deck created", body = Deck),
        (status = 422, description = "Malformed payload")
    )
)]
pub async fn create_deck(
    State(state): State<AppState>,
    JsonPayload(payload): JsonPayload<CreateDeck>,
) -> AppResult<Json<Deck>> {
    let deck = state.stores.decks().create(payload).await?;
    Ok(Json(deck))
}

/// List all decks in creation order
#[utoipa::path(
    get,
    path = "/decks/",
    tag = "Decks",
    responses(
        (status = 200, description = "All decks", body = Vec<Deck>)
    )
)]
pub async fn list_decks(State(state): State<AppState>) -> AppResult<Json<Vec<Deck>>> {
    let decks = state.stores.decks().list().await?;
    Ok(Json(decks))
}

/// Get deck by ID
#[utoipa::path(
    get,
    path = "/decks/{id}",
    tag = "Decks",
    params(
        ("id" = String, Path, description = "Deck ID")
    ),
    responses(
        (status = 200, description = "Deck", body = Deck),
        (status = 404, description = "Deck not found")
    )
)]
pub async fn get_deck(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Deck>> {
    let deck = find_or_not_found(state.stores.decks().as_ref(), &id).await?;
    Ok(Json(deck))
}

/// Decode a base64 deck code into text
///
/// The code need not belong to any stored deck.
#[utoipa::path(
    post,
    path = "/decks/decode",
    tag = "Decks",
    request_body = DeckCode,
    responses(
        (status = 200, description = "Decoded deck code", body = DecodedDeck),
        (status = 400, description = "Invalid deck code"),
        (status = 422, description = "Malformed payload")
    )
)]
pub async fn decode_deck(JsonPayload(payload): JsonPayload<DeckCode>) -> AppResult<Json<DecodedDeck>> {
    let decoded = decode_deck_code(&payload.code)?;
    Ok(Json(DecodedDeck { decoded }))
}

//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::handlers::health_handler::{HealthResponse, MessageResponse, StoreCounts};
use domain::{Card, CreateCard, CreateDeck, CreateUser, Deck, DeckCode, DecodedDeck, User};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Porcana API",
        description = "Users, decks and cards held in process memory"
    ),
    paths(
        crate::handlers::health_handler::root,
        crate::handlers::health_handler::health_check,
        crate::handlers::user_handler::create_user,
        crate::handlers::user_handler::list_users,
        crate::handlers::user_handler::get_user,
        crate::handlers::deck_handler::create_deck,
        crate::handlers::deck_handler::list_decks,
        crate::handlers::deck_handler::get_deck,
        crate::handlers::deck_handler::decode_deck,
        crate::handlers::card_handler::create_card,
        crate::handlers::card_handler::list_cards,
        crate::handlers::card_handler::get_card,
    ),
    components(
        schemas(
            User,
            CreateUser,
            Deck,
            CreateDeck,
            DeckCode,
            DecodedDeck,
            Card,
            CreateCard,
            MessageResponse,
            HealthResponse,
            StoreCounts,
        )
    ),
    tags(
        (name = "System", description = "Liveness and health"),
        (name = "Users", description = "User endpoints"),
        (name = "Decks", description = "Deck endpoints and deck-code decoding"),
        (name = "Cards", description = "Card endpoints"),
    )
)]
pub struct ApiDoc;

//! End-to-end tests for the HTTP surface.

mod support;

use axum::http::StatusCode;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde_json::json;
use uuid::Uuid;

use support::{app, get_request, json_request, send};

// =============================================================================
// Root
// =============================================================================

#[tokio::test]
async fn root_returns_greeting() {
    let app = app();

    let (status, body) = send(&app, get_request("/")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Porcana backend"}));
}

// =============================================================================
// Users
// =============================================================================

#[tokio::test]
async fn create_user_returns_entity_with_generated_id() {
    let app = app();

    let (status, body) = send(
        &app,
        json_request("POST", "/users/", json!({"username": "alice", "email": "a@x.com"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["username"], "alice");
    assert_eq!(body["email"], "a@x.com");
    let id = body["id"].as_str().expect("id string");
    assert!(Uuid::parse_str(id).is_ok());
}

#[tokio::test]
async fn created_user_is_listed_and_fetchable() {
    let app = app();

    let (_, created) = send(
        &app,
        json_request("POST", "/users/", json!({"username": "alice", "email": "a@x.com"})),
    )
    .await;
    let id = created["id"].as_str().unwrap();

    let (status, listed) = send(&app, get_request("/users/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed, json!([created.clone()]));

    let (status, fetched) = send(&app, get_request(&format!("/users/{}", id))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn collection_path_works_without_trailing_slash() {
    let app = app();

    let (status, _) = send(
        &app,
        json_request("POST", "/users", json!({"username": "bob", "email": "b@x.com"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, get_request("/users")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn unknown_user_is_not_found() {
    let app = app();

    for id in [Uuid::new_v4().to_string(), "not-a-uuid".to_string()] {
        let (status, body) = send(&app, get_request(&format!("/users/{}", id))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"detail": "User not found"}));
    }
}

#[tokio::test]
async fn malformed_user_payload_is_unprocessable() {
    let app = app();

    let (status, body) = send(&app, json_request("POST", "/users/", json!({"username": 5}))).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].is_string());

    let (_, listed) = send(&app, get_request("/users/")).await;
    assert_eq!(listed, json!([]));
}

// =============================================================================
// Decks
// =============================================================================

#[tokio::test]
async fn unknown_deck_is_not_found() {
    let app = app();

    let (status, body) = send(
        &app,
        get_request("/decks/00000000-0000-0000-0000-000000000000"),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"detail": "Deck not found"}));
}

#[tokio::test]
async fn deck_keeps_unchecked_user_reference() {
    let app = app();
    let owner = Uuid::new_v4().to_string();

    let (status, deck) = send(
        &app,
        json_request(
            "POST",
            "/decks/",
            json!({"title": "Tech", "description": "Growth picks", "user_id": owner}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deck["user_id"], owner.as_str());

    let (status, fetched) = send(
        &app,
        get_request(&format!("/decks/{}", deck["id"].as_str().unwrap())),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, deck);
}

#[tokio::test]
async fn deck_requires_uuid_owner() {
    let app = app();

    let (status, _) = send(
        &app,
        json_request(
            "POST",
            "/decks/",
            json!({"title": "Tech", "description": "Growth picks", "user_id": "alice"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn decode_returns_text() {
    let app = app();

    let (status, body) = send(
        &app,
        json_request("POST", "/decks/decode", json!({"code": "aGVsbG8="})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"decoded": "hello"}));
}

#[tokio::test]
async fn decode_round_trips_unicode() {
    let app = app();
    let text = "AAPL 40 / MSFT 60 ♠ 덱";

    let (status, body) = send(
        &app,
        json_request("POST", "/decks/decode", json!({"code": STANDARD.encode(text)})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["decoded"], text);
}

#[tokio::test]
async fn decode_accepts_line_wrapped_code() {
    let app = app();

    for code in ["aGVs\nbG8=", " aGVsbG8= "] {
        let (status, body) = send(
            &app,
            json_request("POST", "/decks/decode", json!({"code": code})),
        )
        .await;
        assert_eq!(status, StatusCode::OK, "code {:?}", code);
        assert_eq!(body, json!({"decoded": "hello"}));
    }
}

#[tokio::test]
async fn invalid_deck_code_is_bad_request() {
    let app = app();

    for code in ["%%%", "not-valid-base64!!!", "/w=="] {
        let (status, body) = send(
            &app,
            json_request("POST", "/decks/decode", json!({"code": code})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "code {}", code);
        assert_eq!(body, json!({"detail": "Invalid deck code"}));
    }
}

#[tokio::test]
async fn decode_does_not_create_decks() {
    let app = app();

    send(
        &app,
        json_request("POST", "/decks/decode", json!({"code": "aGVsbG8="})),
    )
    .await;

    let (_, decks) = send(&app, get_request("/decks/")).await;
    assert_eq!(decks, json!([]));
}

// =============================================================================
// Cards
// =============================================================================

#[tokio::test]
async fn cards_are_listed_in_creation_order() {
    let app = app();
    let deck_id = Uuid::new_v4().to_string();

    for (ticker, weight) in [("AAPL", 40.0), ("MSFT", 35.5), ("NVDA", 24.5)] {
        let (status, card) = send(
            &app,
            json_request(
                "POST",
                "/cards/",
                json!({
                    "ticker": ticker,
                    "company_name": format!("{} Corp", ticker),
                    "sector": "Technology",
                    "weight_percentage": weight,
                    "deck_id": deck_id,
                }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(card["weight_percentage"], weight);
        assert_eq!(card["deck_id"], deck_id.as_str());
    }

    let (status, cards) = send(&app, get_request("/cards/")).await;
    assert_eq!(status, StatusCode::OK);
    let tickers: Vec<_> = cards
        .as_array()
        .unwrap()
        .iter()
        .map(|card| card["ticker"].as_str().unwrap())
        .collect();
    assert_eq!(tickers, ["AAPL", "MSFT", "NVDA"]);
}

#[tokio::test]
async fn unknown_card_is_not_found() {
    let app = app();

    let (status, body) = send(&app, get_request(&format!("/cards/{}", Uuid::nil()))).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"detail": "Card not found"}));
}

// =============================================================================
// Isolation and docs
// =============================================================================

#[tokio::test]
async fn separate_apps_do_not_share_state() {
    let first = app();
    let second = app();

    send(
        &first,
        json_request("POST", "/users/", json!({"username": "alice", "email": "a@x.com"})),
    )
    .await;

    let (_, users) = send(&second, get_request("/users/")).await;
    assert_eq!(users, json!([]));
}

#[tokio::test]
async fn openapi_document_lists_resources() {
    let app = app();

    let (status, doc) = send(&app, get_request("/api-docs/openapi.json")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(doc["info"]["title"], "Porcana API");
    assert!(doc["paths"]["/decks/decode"]["post"].is_object());
    assert!(doc["paths"]["/users/{id}"]["get"].is_object());
}

#[tokio::test]
async fn openapi_schemas_carry_examples() {
    let app = app();

    let (_, doc) = send(&app, get_request("/api-docs/openapi.json")).await;
    let schemas = &doc["components"]["schemas"];

    assert_eq!(schemas["DeckCode"]["properties"]["code"]["example"], "aGVsbG8=");
    assert_eq!(schemas["CreateUser"]["properties"]["username"]["example"], "alice");
    assert_eq!(schemas["Card"]["properties"]["ticker"]["example"], "AAPL");
}

#[tokio::test]
async fn docs_can_be_disabled() {
    let config = api_lib::config::ApiConfig {
        enable_docs: false,
        ..Default::default()
    };
    let app = api_lib::routes::create_router(api_lib::state::AppState::new(
        store::Stores::in_memory(),
        config,
    ));

    let response = tower::ServiceExt::oneshot(app, get_request("/api-docs/openapi.json"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn store_failure_is_hidden_behind_generic_message() {
    use std::sync::Arc;

    use common::AppError;
    use domain::{Card, Deck, User};
    use store::{MemoryStore, MockRepository, Stores};

    let mut users = MockRepository::<User>::new();
    users
        .expect_list()
        .returning(|| Err(AppError::internal("connection lost")));
    let stores = Stores::new(
        Arc::new(users),
        Arc::new(MemoryStore::<Deck>::new()),
        Arc::new(MemoryStore::<Card>::new()),
    );
    let app = api_lib::routes::create_router(api_lib::state::AppState::new(
        stores,
        Default::default(),
    ));

    let (status, body) = send(&app, get_request("/users/")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"detail": "An internal error occurred"}));
}

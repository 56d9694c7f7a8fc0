//! Deck entity, its creation payload and deck-code decoding.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::RESOURCE_DECK;
use crate::entity::Entity;
use crate::error::{DomainError, DomainResult};

/// Deck entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Deck {
    /// Unique deck identifier
    pub id: Uuid,
    #[cfg_attr(feature = "openapi", schema(example = "Dividend kings"))]
    pub title: String,
    #[cfg_attr(feature = "openapi", schema(example = "Long-term income portfolio"))]
    pub description: String,
    /// Owner id. Never checked against the user store.
    pub user_id: Uuid,
}

/// Deck creation payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CreateDeck {
    #[cfg_attr(feature = "openapi", schema(example = "Dividend kings"))]
    pub title: String,
    #[cfg_attr(feature = "openapi", schema(example = "Long-term income portfolio"))]
    pub description: String,
    pub user_id: Uuid,
}

impl Entity for Deck {
    type Create = CreateDeck;

    const RESOURCE: &'static str = RESOURCE_DECK;

    fn id(&self) -> Uuid {
        self.id
    }

    fn from_create(id: Uuid, data: CreateDeck) -> Self {
        Self {
            id,
            title: data.title,
            description: data.description,
            user_id: data.user_id,
        }
    }
}

/// Deck code decode request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct DeckCode {
    /// Base64-encoded UTF-8 text
    #[cfg_attr(feature = "openapi", schema(example = "aGVsbG8="))]
    pub code: String,
}

/// Deck code decode result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct DecodedDeck {
    #[cfg_attr(feature = "openapi", schema(example = "hello"))]
    pub decoded: String,
}

/// Decode a deck code: standard base64 (padded) carrying UTF-8 text.
///
/// ASCII whitespace is ignored, so line-wrapped codes decode as if joined.
/// Any other character outside the base64 alphabet is rejected.
///
/// Pure function of its input; no deck is looked up. Both a malformed
/// base64 string and bytes that are not UTF-8 yield
/// [`DomainError::InvalidDeckCode`].
pub fn decode_deck_code(code: &str) -> DomainResult<String> {
    let compact: String = code.chars().filter(|c| !c.is_ascii_whitespace()).collect();

    let bytes = STANDARD.decode(compact).map_err(|e| {
        tracing::debug!("Deck code is not base64: {}", e);
        DomainError::InvalidDeckCode
    })?;

    String::from_utf8(bytes).map_err(|e| {
        tracing::debug!("Deck code is not UTF-8: {}", e);
        DomainError::InvalidDeckCode
    })
}

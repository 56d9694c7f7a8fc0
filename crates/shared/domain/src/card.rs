//! Card entity and its creation payload.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::RESOURCE_CARD;
use crate::entity::Entity;

/// Card entity: one holding inside a deck
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Card {
    /// Unique card identifier
    pub id: Uuid,
    #[cfg_attr(feature = "openapi", schema(example = "AAPL"))]
    pub ticker: String,
    #[cfg_attr(feature = "openapi", schema(example = "Apple Inc."))]
    pub company_name: String,
    #[cfg_attr(feature = "openapi", schema(example = "Technology"))]
    pub sector: String,
    #[cfg_attr(feature = "openapi", schema(example = 12.5))]
    pub weight_percentage: f64,
    /// Owning deck id. Never checked against the deck store.
    pub deck_id: Uuid,
}

/// Card creation payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CreateCard {
    #[cfg_attr(feature = "openapi", schema(example = "AAPL"))]
    pub ticker: String,
    #[cfg_attr(feature = "openapi", schema(example = "Apple Inc."))]
    pub company_name: String,
    #[cfg_attr(feature = "openapi", schema(example = "Technology"))]
    pub sector: String,
    #[cfg_attr(feature = "openapi", schema(example = 12.5))]
    pub weight_percentage: f64,
    pub deck_id: Uuid,
}

impl Entity for Card {
    type Create = CreateCard;

    const RESOURCE: &'static str = RESOURCE_CARD;

    fn id(&self) -> Uuid {
        self.id
    }

    fn from_create(id: Uuid, data: CreateCard) -> Self {
        Self {
            id,
            ticker: data.ticker,
            company_name: data.company_name,
            sector: data.sector,
            weight_percentage: data.weight_percentage,
            deck_id: data.deck_id,
        }
    }
}

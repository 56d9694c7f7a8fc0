//! Domain layer - Entities, creation payloads and deck codes.
//!
//! This crate is the schema layer of the backend: it defines the shape of
//! every stored record and of the payloads used to create them. It has no
//! knowledge of storage or HTTP.

pub mod card;
pub mod constants;
pub mod deck;
pub mod entity;
pub mod error;
pub mod user;

pub use card::{Card, CreateCard};
pub use constants::*;
pub use deck::{decode_deck_code, CreateDeck, Deck, DeckCode, DecodedDeck};
pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use user::{CreateUser, User};

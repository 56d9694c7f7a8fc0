//! Store container - One store per entity type.

use std::sync::Arc;

use domain::{Card, Deck, User};

use crate::memory::MemoryStore;
use crate::repository::Repository;

/// Centralized access to every entity store.
///
/// Cloning is cheap and shares the underlying stores.
#[derive(Clone)]
pub struct Stores {
    users: Arc<dyn Repository<User>>,
    decks: Arc<dyn Repository<Deck>>,
    cards: Arc<dyn Repository<Card>>,
}

impl Stores {
    /// Create a container from already-built stores
    pub fn new(
        users: Arc<dyn Repository<User>>,
        decks: Arc<dyn Repository<Deck>>,
        cards: Arc<dyn Repository<Card>>,
    ) -> Self {
        Self {
            users,
            decks,
            cards,
        }
    }

    /// Create a container of empty in-memory stores
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(MemoryStore::<User>::new()),
            Arc::new(MemoryStore::<Deck>::new()),
            Arc::new(MemoryStore::<Card>::new()),
        )
    }

    /// Get the user store
    pub fn users(&self) -> Arc<dyn Repository<User>> {
        self.users.clone()
    }

    /// Get the deck store
    pub fn decks(&self) -> Arc<dyn Repository<Deck>> {
        self.decks.clone()
    }

    /// Get the card store
    pub fn cards(&self) -> Arc<dyn Repository<Card>> {
        self.cards.clone()
    }
}

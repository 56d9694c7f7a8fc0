//! In-memory implementation of [`Repository`].
//!
//! State lives for the lifetime of the process; a restart starts empty.
//! Request handlers run on a multi-threaded runtime, so the collection sits
//! behind a `tokio::sync::RwLock`: creates serialize on the write lock while
//! lists and lookups share the read lock.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use common::AppResult;
use domain::Entity;

use crate::repository::Repository;

/// Ordered, append-only in-memory collection of one entity type.
pub struct MemoryStore<E> {
    items: Arc<RwLock<Vec<E>>>,
}

impl<E: Entity> MemoryStore<E> {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            items: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl<E: Entity> Default for MemoryStore<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<E: Entity> Repository<E> for MemoryStore<E> {
    async fn create(&self, data: E::Create) -> AppResult<E> {
        let entity = E::from_create(Uuid::new_v4(), data);
        self.items.write().await.push(entity.clone());
        tracing::debug!(resource = E::RESOURCE, id = %entity.id(), "Entity created");
        Ok(entity)
    }

    async fn list(&self) -> AppResult<Vec<E>> {
        Ok(self.items.read().await.clone())
    }

    async fn get(&self, id: &str) -> AppResult<Option<E>> {
        // Linear scan on the rendered id; unparsable ids simply never match.
        Ok(self
            .items
            .read()
            .await
            .iter()
            .find(|entity| entity.id().to_string() == id)
            .cloned())
    }

    async fn count(&self) -> AppResult<usize> {
        Ok(self.items.read().await.len())
    }
}

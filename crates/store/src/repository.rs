//! Repository trait shared by every entity store.

use async_trait::async_trait;

use common::AppResult;
use domain::Entity;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Store of one entity type, for dependency injection.
///
/// Entities are only ever appended: there is no update or delete.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait Repository<E: Entity>: Send + Sync {
    /// Assign a fresh id to the payload, append the entity and return it.
    async fn create(&self, data: E::Create) -> AppResult<E>;

    /// All entities in insertion order.
    async fn list(&self) -> AppResult<Vec<E>>;

    /// Entity whose id renders as `id`, or `None`.
    async fn get(&self, id: &str) -> AppResult<Option<E>>;

    /// Number of stored entities.
    async fn count(&self) -> AppResult<usize>;
}

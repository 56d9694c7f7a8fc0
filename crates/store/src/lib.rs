//! Store layer - Ordered, append-only entity collections.
//!
//! Each entity type gets its own store behind the [`Repository`] trait.
//! [`Stores`] bundles one store per type and is constructed once at process
//! start, then injected wherever entities are read or created.

pub mod container;
pub mod memory;
pub mod repository;

pub use container::Stores;
pub use memory::MemoryStore;
pub use repository::Repository;

#[cfg(any(test, feature = "test-utils"))]
pub use repository::MockRepository;

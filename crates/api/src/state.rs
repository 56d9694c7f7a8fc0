//! Application state for dependency injection.

use store::Stores;

use crate::config::ApiConfig;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub stores: Stores,
    pub config: ApiConfig,
}

impl AppState {
    /// Create new app state.
    pub fn new(stores: Stores, config: ApiConfig) -> Self {
        Self { stores, config }
    }

    /// Fresh in-memory stores with default configuration.
    pub fn in_memory() -> Self {
        Self::new(Stores::in_memory(), ApiConfig::default())
    }
}

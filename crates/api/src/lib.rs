//! Porcana API Library
//!
//! HTTP surface over the user, deck and card stores.

pub mod config;
pub mod extractors;
pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod state;

use store::Stores;
use tracing::{info, warn};

use crate::config::ApiConfig;
use crate::routes::create_router;
use crate::state::AppState;

/// Run the HTTP server until Ctrl-C.
///
/// Stores are created empty here and live until the server stops.
pub async fn run_server(config: ApiConfig) -> Result<(), Box<dyn std::error::Error>> {
    let addr = config.server_addr();
    let service_name = config.service.service_name.clone();

    // Create app state
    let state = AppState::new(Stores::in_memory(), config);

    // Build router
    let app = create_router(state);

    // Run server
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("{} listening on {}", service_name, listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("{} stopped", service_name);
    Ok(())
}

/// Resolve on Ctrl-C. If the signal handler cannot be installed, never resolve.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

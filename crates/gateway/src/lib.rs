//! API Gateway Library
//!
//! This crate provides the HTTP REST API over the user service.

pub mod cli;
pub mod config;
pub mod extractors;
pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod state;

use std::net::SocketAddr;

use tracing::{info, warn};

use crate::config::GatewayConfig;
use crate::routes::create_router;
use crate::state::AppState;

/// Run the HTTP server with the given configuration.
pub async fn run_server(config: GatewayConfig) -> Result<(), Box<dyn std::error::Error>> {
    if config.allow_bulk_delete {
        warn!("Bulk delete is enabled: DELETE /users removes every user");
    }

    // Build address
    let addr: SocketAddr = config.service.bind_address().parse()?;

    // Create app state with its own store
    let state = AppState::in_memory(config);

    // Build router
    let app = create_router(state);

    info!("Gateway listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

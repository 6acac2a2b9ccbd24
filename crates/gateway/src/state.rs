//! Application state for dependency injection.

use std::sync::Arc;

use user_service_lib::service::UserService;

use crate::config::GatewayConfig;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserService>,
    pub config: GatewayConfig,
}

impl AppState {
    /// Create new app state.
    pub fn new(user_service: Arc<dyn UserService>, config: GatewayConfig) -> Self {
        Self {
            user_service,
            config,
        }
    }

    /// State backed by a fresh in-memory store.
    pub fn in_memory(config: GatewayConfig) -> Self {
        Self::new(user_service_lib::in_memory(), config)
    }
}

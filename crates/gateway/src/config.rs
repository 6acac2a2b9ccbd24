//! Gateway configuration.

use common::{env_flag, ServiceConfig};

/// Environment prefix for host and port (`GATEWAY_HOST`, `GATEWAY_PORT`).
pub const ENV_PREFIX: &str = "GATEWAY";

/// Enables `DELETE /users` when set to `true`/`1`/`yes`.
pub const ENV_ALLOW_BULK_DELETE: &str = "GATEWAY_ALLOW_BULK_DELETE";

/// Gateway configuration.
#[derive(Debug, Clone, Default)]
pub struct GatewayConfig {
    /// Name, bind address and log level
    pub service: ServiceConfig,
    /// Expose the bulk clear endpoint (test environments only)
    pub allow_bulk_delete: bool,
}

impl GatewayConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            service: ServiceConfig::from_env(ENV_PREFIX),
            allow_bulk_delete: env_flag(ENV_ALLOW_BULK_DELETE),
        }
    }

    /// Override the bind address, keeping everything else.
    pub fn with_address(mut self, host: String, port: u16) -> Self {
        self.service.host = host;
        self.service.port = port;
        self
    }

    /// Enable or disable `DELETE /users`.
    pub fn with_bulk_delete(mut self, allow: bool) -> Self {
        self.allow_bulk_delete = allow;
        self
    }
}

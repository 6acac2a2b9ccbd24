//! Shared configuration structures.

use std::env;

/// Base service configuration shared by all services.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Service name reported by the liveness check and used in logs
    pub service_name: String,
    /// Host address to bind
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Log level used when `RUST_LOG` is not set
    pub log_level: String,
}

impl ServiceConfig {
    /// Load from `SERVICE_NAME`, `<prefix>_HOST`, `<prefix>_PORT` and `LOG_LEVEL`.
    pub fn from_env(prefix: &str) -> Self {
        let defaults = Self::default();
        Self {
            service_name: env::var("SERVICE_NAME").unwrap_or(defaults.service_name),
            host: env::var(format!("{}_HOST", prefix)).unwrap_or(defaults.host),
            port: env::var(format!("{}_PORT", prefix))
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            log_level: env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
        }
    }

    /// Socket address string, e.g. `0.0.0.0:3000`.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            service_name: domain::SERVICE_NAME.to_string(),
            host: "0.0.0.0".to_string(),
            port: 3000,
            log_level: "info".to_string(),
        }
    }
}

/// Parse a boolean flag from an environment variable (`true`/`1`/`yes`).
pub fn env_flag(key: &str) -> bool {
    env::var(key)
        .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "true" | "1" | "yes"))
        .unwrap_or(false)
}

//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::config::GatewayConfig;

/// HTTP API for user management
#[derive(Parser, Debug)]
#[command(name = "gateway")]
#[command(about = "HTTP API for user management")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server
    Serve(ServeArgs),
}

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Host to bind to
    #[arg(long, env = "GATEWAY_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "GATEWAY_PORT", default_value = "3000")]
    pub port: u16,

    /// Expose DELETE /users (test environments only).
    /// `GATEWAY_ALLOW_BULK_DELETE` is read by `GatewayConfig::from_env`.
    #[arg(long)]
    pub allow_bulk_delete: bool,
}

impl ServeArgs {
    /// Apply the command line on top of the environment configuration.
    pub fn into_config(self, base: GatewayConfig) -> GatewayConfig {
        let allow_bulk_delete = self.allow_bulk_delete || base.allow_bulk_delete;
        base.with_address(self.host, self.port)
            .with_bulk_delete(allow_bulk_delete)
    }
}

//! API Gateway - HTTP REST API for user management.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gateway_lib::cli::{Cli, Commands};
use gateway_lib::config::GatewayConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = GatewayConfig::from_env();

    // Initialize tracing
    let default_filter = format!("{},tower_http=debug", config.service.log_level);
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve(args) => {
            gateway_lib::run_server(args.into_config(config)).await?;
        }
    }

    Ok(())
}

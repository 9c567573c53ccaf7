//! Wayfarer API Server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p wayfarer-api
//! ```
//!
//! Configuration is loaded from environment variables (and `.env` if present).

use tracing::{error, info};
use wayfarer_common::{try_init_tracing_with_config, AppConfig, TracingConfig};

#[tokio::main]
async fn main() {
    let production =
        std::env::var("APP_ENV").is_ok_and(|env| env.eq_ignore_ascii_case("production"));
    let tracing_config = if production {
        TracingConfig::production()
    } else {
        TracingConfig::default()
    };

    if let Err(e) = try_init_tracing_with_config(tracing_config) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    if let Err(e) = run().await {
        error!(error = %e, "Server failed to start");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    info!("Starting Wayfarer API Server...");

    let config = AppConfig::from_env().map_err(|e| {
        error!(error = %e, "Failed to load configuration");
        e
    })?;

    info!(
        env = ?config.app.env,
        port = config.api.port,
        "Configuration loaded"
    );

    wayfarer_api::run(config).await?;

    Ok(())
}

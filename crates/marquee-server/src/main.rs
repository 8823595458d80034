//! # Marquee Server
//!
//! Main entry point: loads configuration, initializes logging, wires the
//! services and serves the HTTP API.

use marquee_config::{ConfigLoader, ObservabilityConfig};
use marquee_server::{app, startup};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let config = match ConfigLoader::from_default_location() {
        Ok(loader) => loader.get().await,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config.observability);
    startup::print_banner();

    info!("Starting Marquee Server...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));
    info!("Environment: {}", config.app.environment);
    info!("Cache strategy: {}", config.cache.strategy);

    if let Err(e) = app::serve(config).await {
        error!("Application error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(observability: &ObservabilityConfig) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{},marquee=debug,tower_http=debug",
            observability.log_level
        ))
    });

    let registry = tracing_subscriber::registry().with(filter);

    if observability.json_logs() {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .init();
    }
}

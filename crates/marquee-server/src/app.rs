//! Application assembly and serving.

use crate::di::build_marquee_module;
use crate::startup::print_startup_info;
use axum::Router;
use marquee_config::AppConfig;
use marquee_core::{MarqueeError, MarqueeResult};
use marquee_rest::create_router_from_module;
use tokio::signal;
use tracing::{info, warn};

/// Wires services and the HTTP router for `config`.
pub async fn build_app(config: &AppConfig) -> MarqueeResult<Router> {
    let module = build_marquee_module(config).await?;
    Ok(create_router_from_module(module.as_ref(), &config.server))
}

/// Serves the application until Ctrl+C or SIGTERM.
pub async fn serve(config: AppConfig) -> MarqueeResult<()> {
    let router = build_app(&config).await?;

    let addr = config.server.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| MarqueeError::Internal(format!("Failed to bind {}: {}", addr, e)))?;

    print_startup_info(&config);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| MarqueeError::Internal(format!("HTTP server error: {}", e)))?;

    info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received terminate signal, initiating graceful shutdown...");
        }
    }
}

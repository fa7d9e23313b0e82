//! Main entry point for the gridpulse dashboard server

use anyhow::{Context, Result};
use gridpulse_core::{Config, init_logging};
use gridpulse_web::build_app;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (for development convenience)
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("Note: .env file not loaded: {e}");
    }

    // Load configuration before logging so the logging section applies
    let config = Config::load().unwrap_or_else(|err| {
        eprintln!("Failed to load config ({err}), using defaults");
        Config::default()
    });

    init_logging(&config.logging).context("Failed to initialize logging")?;

    info!(
        "Gridpulse Energy Dashboard v{}",
        env!("CARGO_PKG_VERSION")
    );

    // Structural failures here are fatal: the dashboard cannot render
    // without its temporal axis.
    info!("📂 Loading dataset from {}", config.data.path.display());
    let table = gridpulse_data::load(&config.data.path)
        .with_context(|| format!("Cannot load dataset {}", config.data.path.display()))?;

    if let Some((start, end)) = table.span() {
        info!(
            rows = table.len(),
            columns = table.column_count(),
            "✅ Dataset ready, {start} to {end}"
        );
    } else {
        info!("⚠️  Dataset is empty, dashboard will render placeholders");
    }

    // Build the application router
    let app = build_app(config.clone(), table)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()));

    // Create server address
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .context("Invalid server address")?;

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;

    info!("🚀 Dashboard ready on http://{addr}");
    info!("💚 Health:  http://{addr}/health");

    // Start the server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("👋 Server shutdown complete");
    Ok(())
}

/// Handle graceful shutdown signals
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, shutting down gracefully...");
        },
        () = terminate => {
            info!("Received terminate signal, shutting down gracefully...");
        },
    }
}

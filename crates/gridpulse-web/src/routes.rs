//! Route definitions for the dashboard

use crate::{handlers, state::AppState};
use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::compression::CompressionLayer;

/// Build the complete application router.
///
/// A single dashboard route plus its reactive update channel; this is
/// not a general API.
pub fn build_routes() -> Router<Arc<AppState>> {
    Router::new()
        // Page routes
        .route("/", get(handlers::pages::dashboard))
        // Reactive update channel
        .route("/api/dashboard", get(handlers::dashboard::render_dashboard))
        .route("/api/meta", get(handlers::dashboard::dashboard_meta))
        // Health check
        .route("/health", get(handlers::health::health_check))
        // Fallback handler for unknown routes
        .fallback(not_found_handler)
        .layer(CompressionLayer::new())
}

/// Handle 404 Not Found errors
async fn not_found_handler() -> (axum::http::StatusCode, axum::Json<serde_json::Value>) {
    (
        axum::http::StatusCode::NOT_FOUND,
        axum::Json(serde_json::json!({
            "error": "Not Found",
            "code": "ROUTE_NOT_FOUND",
            "message": "The requested endpoint does not exist"
        })),
    )
}

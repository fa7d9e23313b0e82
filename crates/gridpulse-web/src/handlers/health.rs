//! Health check endpoint for monitoring and diagnostics

use crate::state::AppState;
use axum::{extract::State, response::Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Timestamp of the check
    pub timestamp: chrono::DateTime<chrono::Utc>,
    /// Loaded dataset summary
    pub dataset: DatasetHealth,
    /// System uptime in seconds
    pub uptime_seconds: u64,
}

/// Loaded dataset summary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetHealth {
    /// Number of rows
    pub rows: usize,
    /// Number of numeric columns
    pub columns: usize,
}

/// Basic health check endpoint for monitoring systems.
///
/// The table is immutable after startup, so a live process with a loaded
/// table is always healthy; there is no degraded state to report.
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        dataset: DatasetHealth {
            rows: state.table.len(),
            columns: state.table.column_count(),
        },
        uptime_seconds: state.started_at.elapsed().as_secs(),
    })
}

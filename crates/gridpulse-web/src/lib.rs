//! Web presentation shell for the gridpulse dashboard
//!
//! Serves the static dashboard page and the reactive render endpoint the
//! page re-requests on every tab or date-range change. The router built
//! here is the embeddable server object; `main` wraps it in a standalone
//! listener.

#![forbid(unsafe_code)]

pub mod handlers;
pub mod routes;
pub mod state;

pub use state::AppState;

use axum::Router;
use gridpulse_core::Config;
use gridpulse_data::Table;
use std::sync::Arc;

/// Build the complete web application with all routes and state
#[must_use]
pub fn build_app(config: Config, table: Table) -> Router {
    let state = Arc::new(AppState::new(config, table));

    routes::build_routes().with_state(state)
}

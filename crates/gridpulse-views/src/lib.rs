//! Metrics panel, chart descriptions, and tab view builders for the
//! gridpulse dashboard

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod chart;
pub mod metrics;
pub mod render;
pub mod views;

// Re-export commonly used types
pub use chart::{ChartDescription, ChartKind, RenderedView, Series};
pub use metrics::{MetricsPanel, compute_metrics};
pub use render::{DashboardViewModel, Tab, render, route};

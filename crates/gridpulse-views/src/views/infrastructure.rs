//! Infrastructure tab: transmission network length by voltage tier

use crate::chart::{ChartKind, RenderedView, multi_series, single_series};
use gridpulse_data::Table;
use gridpulse_data::resolve::{INFRASTRUCTURE_MARKERS, alias, columns_with_markers, resolve};

/// Placeholder when no infrastructure chart can be produced
pub const PLACEHOLDER: &str = "No infrastructure data available";

/// Build the infrastructure charts
#[must_use]
pub fn build(table: &Table) -> RenderedView {
    let mut charts = Vec::new();

    let transmission = columns_with_markers(table, INFRASTRUCTURE_MARKERS);
    if !transmission.is_empty() {
        charts.extend(multi_series(
            table,
            ChartKind::Area,
            &transmission,
            "Transmission Infrastructure by Type",
            "Length (km)",
            "Infrastructure Type",
        ));
    }

    if let Some(column) = resolve(table, alias::TOTAL_INFRASTRUCTURE) {
        charts.extend(single_series(
            table,
            ChartKind::Line,
            column,
            "Total Transmission Infrastructure",
            "Length (km)",
        ));
    }

    RenderedView::from_charts(charts, PLACEHOLDER)
}

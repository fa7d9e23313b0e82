//! Renewable tab: renewable totals, share, and per-source breakdown

use crate::chart::{ChartKind, RenderedView, multi_series, single_series};
use gridpulse_data::Table;
use gridpulse_data::resolve::{RENEWABLE_SOURCES, alias, columns_in_set, resolve};

/// Placeholder when no renewable chart can be produced
pub const PLACEHOLDER: &str = "No renewable data available";

/// Build the renewable focus charts
#[must_use]
pub fn build(table: &Table) -> RenderedView {
    let mut charts = Vec::new();

    if let Some(column) = resolve(table, alias::RENEWABLE_GENERATION) {
        charts.extend(single_series(
            table,
            ChartKind::Line,
            column,
            "Total Renewable Generation",
            "Generation (GWh)",
        ));
    }

    if let Some(column) = resolve(table, alias::RENEWABLE_SHARE) {
        charts.extend(single_series(
            table,
            ChartKind::Line,
            column,
            "Renewable Energy Share",
            "Renewable Share (%)",
        ));
    }

    let sources = columns_in_set(table, RENEWABLE_SOURCES);
    if !sources.is_empty() {
        charts.extend(multi_series(
            table,
            ChartKind::Area,
            &sources,
            "Renewable Generation by Source",
            "Generation (GWh)",
            "Source",
        ));
    }

    RenderedView::from_charts(charts, PLACEHOLDER)
}

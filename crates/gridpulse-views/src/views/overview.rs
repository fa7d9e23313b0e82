//! Overview tab: headline trends across consumption, renewables,
//! generation mix, and customers

use crate::chart::{ChartKind, RenderedView, multi_series, single_series};
use gridpulse_data::Table;
use gridpulse_data::resolve::{GENERATION_SOURCES, alias, columns_in_set, resolve};

/// Placeholder when no overview chart can be produced
pub const PLACEHOLDER: &str = "No data available for overview";

/// Build the overview charts
#[must_use]
pub fn build(table: &Table) -> RenderedView {
    let mut charts = Vec::new();

    if let Some(column) = resolve(table, alias::CONSUMPTION) {
        charts.extend(single_series(
            table,
            ChartKind::Line,
            column,
            "Electricity Consumption Trend",
            "Consumption (GWh)",
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

    let generation = columns_in_set(table, GENERATION_SOURCES);
    if !generation.is_empty() {
        charts.extend(multi_series(
            table,
            ChartKind::Area,
            &generation,
            "Energy Generation by Source",
            "Generation (GWh)",
            "Source",
        ));
    }

    if let Some(column) = resolve(table, alias::CUSTOMERS) {
        charts.extend(single_series(
            table,
            ChartKind::Line,
            column,
            "Cumulative Customer Connections",
            "Customers",
        ));
    }

    RenderedView::from_charts(charts, PLACEHOLDER)
}

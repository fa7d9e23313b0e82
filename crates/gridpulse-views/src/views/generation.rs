//! Generation tab: monthly mix, renewable vs non-renewable split, and
//! import dependency

use crate::chart::{ChartDescription, ChartKind, RenderedView, Series, X_LABEL, multi_series};
use gridpulse_data::Table;
use gridpulse_data::resolve::{GENERATION_SOURCES, alias, columns_in_set, resolve};

/// Placeholder when no generation chart can be produced
pub const PLACEHOLDER: &str = "No generation data available";

/// Build the generation analysis charts
#[must_use]
pub fn build(table: &Table) -> RenderedView {
    let mut charts = Vec::new();

    let generation = columns_in_set(table, GENERATION_SOURCES);
    if !generation.is_empty() {
        charts.extend(multi_series(
            table,
            ChartKind::Bar,
            &generation,
            "Monthly Generation by Source",
            "Generation (GWh)",
            "Source",
        ));

        if let (Some(thermal), Some(imports)) = (
            resolve(table, alias::THERMAL),
            resolve(table, alias::IMPORTS),
        ) {
            let renewable_columns: Vec<&str> = generation
                .iter()
                .map(String::as_str)
                .filter(|column| {
                    let upper = column.to_uppercase();
                    upper != "THERMAL" && upper != "IMPORTS"
                })
                .collect();

            if !renewable_columns.is_empty() {
                charts.push(renewable_split(table, thermal, imports, &renewable_columns));
            }
        }

        if let (Some(imports), Some(total)) = (
            resolve(table, alias::IMPORTS),
            resolve(table, alias::TOTAL_GENERATION),
        ) {
            charts.push(import_dependency(table, imports, total));
        }
    }

    RenderedView::from_charts(charts, PLACEHOLDER)
}

/// Derive the Renewable vs `NonRenewable` area chart.
///
/// `NonRenewable` is thermal plus imports, missing when either cell is
/// missing. `Renewable` sums the remaining source columns, with missing
/// cells contributing nothing.
fn renewable_split(
    table: &Table,
    thermal: &str,
    imports: &str,
    renewable_columns: &[&str],
) -> ChartDescription {
    let thermal_values = table.series(thermal).unwrap_or(&[]);
    let imports_values = table.series(imports).unwrap_or(&[]);

    let non_renewable: Vec<Option<f64>> = thermal_values
        .iter()
        .zip(imports_values)
        .map(|(thermal, imports)| match (thermal, imports) {
            (Some(t), Some(i)) => Some(t + i),
            _ => None,
        })
        .collect();

    let renewable: Vec<Option<f64>> = (0..table.len())
        .map(|row| {
            let total: f64 = renewable_columns
                .iter()
                .filter_map(|column| table.series(column).and_then(|values| values[row]))
                .sum();
            Some(total)
        })
        .collect();

    ChartDescription {
        kind: ChartKind::Area,
        title: "Renewable vs Non-Renewable Generation".to_string(),
        x_label: X_LABEL.to_string(),
        y_label: "Generation (GWh)".to_string(),
        legend_label: Some("Type".to_string()),
        series: vec![
            Series::from_values("Renewable", table.months(), &renewable),
            Series::from_values("NonRenewable", table.months(), &non_renewable),
        ],
    }
}

/// Derive the import dependency line: imports over total generation, as a
/// percentage. A zero or missing total yields no point rather than an
/// unbounded ratio.
fn import_dependency(table: &Table, imports: &str, total: &str) -> ChartDescription {
    let imports_values = table.series(imports).unwrap_or(&[]);
    let total_values = table.series(total).unwrap_or(&[]);

    let percentage: Vec<Option<f64>> = imports_values
        .iter()
        .zip(total_values)
        .map(|(imports, total)| match (imports, total) {
            (Some(i), Some(t)) if *t != 0.0 => Some(i / t * 100.0),
            _ => None,
        })
        .collect();

    ChartDescription {
        kind: ChartKind::Line,
        title: "Import Dependency".to_string(),
        x_label: X_LABEL.to_string(),
        y_label: "Import Percentage (%)".to_string(),
        legend_label: None,
        series: vec![Series::from_values(
            "Import_Percentage",
            table.months(),
            &percentage,
        )],
    }
}

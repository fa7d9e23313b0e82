//! Customer tab: connection growth and tariff comparison

use crate::chart::{ChartKind, RenderedView, from_long, melt, single_series};
use gridpulse_data::Table;
use gridpulse_data::resolve::{alias, resolve, tariff_columns};

/// Placeholder when no customer chart can be produced
pub const PLACEHOLDER: &str = "No customer data available";

/// Build the customer analysis charts
#[must_use]
pub fn build(table: &Table) -> RenderedView {
    let mut charts = Vec::new();

    if let Some(column) = resolve(table, alias::NEW_CUSTOMERS) {
        charts.extend(single_series(
            table,
            ChartKind::Bar,
            column,
            "New Customers per Month",
            "New Customers",
        ));
    }

    if let Some(column) = resolve(table, alias::CUSTOMERS) {
        charts.extend(single_series(
            table,
            ChartKind::Line,
            column,
            "Cumulative Customer Growth",
            "Customers",
        ));
    }

    let tariffs = tariff_columns(table);
    if !tariffs.is_empty() {
        let rows = melt(table, &tariffs);
        charts.extend(from_long(
            ChartKind::Line,
            &rows,
            "Average Tariff by Customer Category",
            "Tariff (per kWh)",
            "Customer Category",
        ));
    }

    RenderedView::from_charts(charts, PLACEHOLDER)
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use indexmap::IndexMap;
    use pretty_assertions::assert_eq;

    fn month(y: i32, m: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, 1).unwrap()
    }

    fn table_from(columns: Vec<(&str, Vec<Option<f64>>)>) -> Table {
        let rows = columns.first().map_or(0, |(_, values)| values.len());
        let months = (0..rows)
            .map(|idx| month(2024, u32::try_from(idx).unwrap() + 1))
            .collect();
        let series: IndexMap<String, Vec<Option<f64>>> = columns
            .into_iter()
            .map(|(name, values)| (name.to_string(), values))
            .collect();
        Table::new(months, series)
    }

    #[test]
    fn test_tariff_reshape_triples() {
        let table = table_from(vec![
            ("Residential_tariff", vec![Some(5.2)]),
            ("Commercial_tariff", vec![Some(7.1)]),
        ]);

        let rows = melt(&table, &tariff_columns(&table));

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].month, month(2024, 1));
        assert_eq!(rows[0].category, "Residential_tariff");
        assert_eq!(rows[0].value, Some(5.2));
        assert_eq!(rows[1].month, month(2024, 1));
        assert_eq!(rows[1].category, "Commercial_tariff");
        assert_eq!(rows[1].value, Some(7.1));
    }

    #[test]
    fn test_tariff_chart_has_one_series_per_category() {
        let table = table_from(vec![
            ("Residential_tariff", vec![Some(5.2), Some(5.3)]),
            ("Commercial_tariff", vec![Some(7.1), Some(7.0)]),
        ]);

        let RenderedView::Charts { charts } = build(&table) else {
            panic!("expected charts");
        };
        assert_eq!(charts.len(), 1);
        assert_eq!(charts[0].title, "Average Tariff by Customer Category");
        assert_eq!(
            charts[0].legend_label.as_deref(),
            Some("Customer Category")
        );
        assert_eq!(charts[0].series.len(), 2);
        assert_eq!(charts[0].series[0].name, "Residential_tariff");
        assert_eq!(charts[0].series[1].name, "Commercial_tariff");
    }

    #[test]
    fn test_customer_growth_charts() {
        let table = table_from(vec![
            ("Number_of_new_customers", vec![Some(120.0)]),
            ("Total_Customers", vec![Some(9_000.0)]),
        ]);

        let view = build(&table);

        assert_eq!(
            view.chart_titles(),
            vec!["New Customers per Month", "Cumulative Customer Growth"]
        );
    }

    #[test]
    fn test_placeholder_when_nothing_matches() {
        let table = table_from(vec![("Hydro", vec![Some(1.0)])]);

        let view = build(&table);

        assert_eq!(
            view,
            RenderedView::Placeholder {
                message: PLACEHOLDER.to_string()
            }
        );
    }
}

//! Declarative chart descriptions consumed by the rendering layer
//!
//! A chart description carries everything the browser-side plotting
//! library needs: the chart kind, titles and axis labels, and the
//! materialized month-aligned series. Descriptions are produced fresh on
//! every render and never cached.

use chrono::NaiveDate;
use gridpulse_data::Table;
use indexmap::IndexMap;
use serde::Serialize;

/// Supported chart kinds. Multi-series `Bar` and `Area` charts are
/// stacked by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    /// Line chart
    Line,
    /// Bar chart
    Bar,
    /// Area chart
    Area,
}

/// One observation on the temporal axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DataPoint {
    /// Temporal key of the row
    pub month: NaiveDate,
    /// Observed value; `None` marks a missing cell, which the renderer
    /// omits from the trace
    pub value: Option<f64>,
}

/// A named series of month-aligned points
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    /// Legend name
    pub name: String,
    /// Points in row order
    pub points: Vec<DataPoint>,
}

impl Series {
    /// Build a series from one table column. `None` when the column is
    /// absent.
    #[must_use]
    pub fn from_column(table: &Table, name: &str) -> Option<Self> {
        let values = table.series(name)?;
        Some(Self::from_values(name, table.months(), values))
    }

    /// Build a series from explicit month-aligned values
    #[must_use]
    pub fn from_values(name: &str, months: &[NaiveDate], values: &[Option<f64>]) -> Self {
        let points = months
            .iter()
            .zip(values)
            .map(|(month, value)| DataPoint {
                month: *month,
                value: *value,
            })
            .collect();
        Self {
            name: name.to_string(),
            points,
        }
    }
}

/// Declarative chart bundle: kind, labels, and materialized series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartDescription {
    /// Chart kind
    pub kind: ChartKind,
    /// Chart title
    pub title: String,
    /// X axis label
    pub x_label: String,
    /// Y axis label
    pub y_label: String,
    /// Legend title for multi-series charts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend_label: Option<String>,
    /// The series to draw
    pub series: Vec<Series>,
}

/// X axis label shared by every chart: the temporal key is always the
/// horizontal axis.
pub const X_LABEL: &str = "Date";

/// Chart over a single table column. `None` when the column is absent.
#[must_use]
pub fn single_series(
    table: &Table,
    kind: ChartKind,
    column: &str,
    title: &str,
    y_label: &str,
) -> Option<ChartDescription> {
    let series = Series::from_column(table, column)?;
    Some(ChartDescription {
        kind,
        title: title.to_string(),
        x_label: X_LABEL.to_string(),
        y_label: y_label.to_string(),
        legend_label: None,
        series: vec![series],
    })
}

/// Chart over several table columns, one series per column. `None` when
/// `columns` is empty; absent columns are skipped.
#[must_use]
pub fn multi_series(
    table: &Table,
    kind: ChartKind,
    columns: &[String],
    title: &str,
    y_label: &str,
    legend_label: &str,
) -> Option<ChartDescription> {
    let series: Vec<Series> = columns
        .iter()
        .filter_map(|column| Series::from_column(table, column))
        .collect();

    if series.is_empty() {
        return None;
    }

    Some(ChartDescription {
        kind,
        title: title.to_string(),
        x_label: X_LABEL.to_string(),
        y_label: y_label.to_string(),
        legend_label: Some(legend_label.to_string()),
        series,
    })
}

/// Long-format observation produced by [`melt`]: one row per month and
/// category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LongRow {
    /// Temporal key
    pub month: NaiveDate,
    /// Source column name
    pub category: String,
    /// Observed value
    pub value: Option<f64>,
}

/// Reshape wide columns into long format, column-major: all rows of the
/// first column, then the second, and so on. Absent columns are skipped.
#[must_use]
pub fn melt(table: &Table, columns: &[String]) -> Vec<LongRow> {
    let mut rows = Vec::new();
    for column in columns {
        let Some(values) = table.series(column) else {
            continue;
        };
        for (month, value) in table.months().iter().zip(values) {
            rows.push(LongRow {
                month: *month,
                category: column.clone(),
                value: *value,
            });
        }
    }
    rows
}

/// Chart over long-format rows, one series per category in first-seen
/// order. `None` when `rows` is empty.
#[must_use]
pub fn from_long(
    kind: ChartKind,
    rows: &[LongRow],
    title: &str,
    y_label: &str,
    legend_label: &str,
) -> Option<ChartDescription> {
    if rows.is_empty() {
        return None;
    }

    let mut grouped: IndexMap<&str, Vec<DataPoint>> = IndexMap::new();
    for row in rows {
        grouped
            .entry(row.category.as_str())
            .or_default()
            .push(DataPoint {
                month: row.month,
                value: row.value,
            });
    }

    let series = grouped
        .into_iter()
        .map(|(name, points)| Series {
            name: name.to_string(),
            points,
        })
        .collect();

    Some(ChartDescription {
        kind,
        title: title.to_string(),
        x_label: X_LABEL.to_string(),
        y_label: y_label.to_string(),
        legend_label: Some(legend_label.to_string()),
        series,
    })
}

/// The output of one view builder
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RenderedView {
    /// One or more charts to draw
    Charts {
        /// Charts in layout order
        charts: Vec<ChartDescription>,
    },
    /// The view produced no charts for the current table
    Placeholder {
        /// Human-readable explanation
        message: String,
    },
    /// Nothing to render; used for unknown tab identifiers
    Empty,
}

impl RenderedView {
    /// Wrap builder output, substituting `placeholder` when no chart was
    /// produced
    #[must_use]
    pub fn from_charts(charts: Vec<ChartDescription>, placeholder: &str) -> Self {
        if charts.is_empty() {
            Self::Placeholder {
                message: placeholder.to_string(),
            }
        } else {
            Self::Charts { charts }
        }
    }

    /// Titles of the contained charts, in order; empty for placeholders
    #[must_use]
    pub fn chart_titles(&self) -> Vec<&str> {
        match self {
            Self::Charts { charts } => charts.iter().map(|chart| chart.title.as_str()).collect(),
            Self::Placeholder { .. } | Self::Empty => Vec::new(),
        }
    }
}

//! Key-metrics strip over the latest row of the filtered table

use gridpulse_data::{Table, resolve::alias, resolve::resolve};
use serde::Serialize;

/// Shown when the filtered table has no rows
pub const NO_DATA_MESSAGE: &str = "No data available for selected date range";

/// Shown when none of the four metric columns resolve
pub const UNAVAILABLE_MESSAGE: &str = "Metrics not available";

/// Marker for a resolved column whose latest cell is missing
const MISSING_VALUE: &str = "–";

/// One metric card: a fixed label and a pre-formatted value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Metric {
    /// Card label
    pub label: String,
    /// Formatted latest value
    pub value: String,
}

/// The metrics strip, in one of three states
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MetricsPanel {
    /// The filtered table is empty
    NoData {
        /// Human-readable explanation
        message: String,
    },
    /// No metric column resolved
    Unavailable {
        /// Human-readable explanation
        message: String,
    },
    /// At least one metric resolved
    Ready {
        /// Cards in fixed order: consumption, renewable share,
        /// customers, transmission
        metrics: Vec<Metric>,
    },
}

/// Compute the metrics strip from the filtered table.
///
/// The latest row is the last row in source order. Each of the four fixed
/// metrics is included only when its column resolves; a resolved column
/// whose latest cell is missing renders the explicit missing marker.
#[must_use]
pub fn compute_metrics(table: &Table) -> MetricsPanel {
    if table.is_empty() {
        return MetricsPanel::NoData {
            message: NO_DATA_MESSAGE.to_string(),
        };
    }

    let mut metrics = Vec::new();

    if let Some(column) = resolve(table, alias::CONSUMPTION) {
        metrics.push(Metric {
            label: "Total Consumption (GWh)".to_string(),
            value: format_decimal(table.last_value(column)),
        });
    }

    if let Some(column) = resolve(table, alias::RENEWABLE_SHARE) {
        metrics.push(Metric {
            label: "Renewable Share (%)".to_string(),
            value: format_percent(table.last_value(column)),
        });
    }

    if let Some(column) = resolve(table, alias::CUSTOMERS) {
        metrics.push(Metric {
            label: "Total Customers".to_string(),
            value: format_count(table.last_value(column)),
        });
    }

    if let Some(column) = resolve(table, alias::TRANSMISSION) {
        metrics.push(Metric {
            label: "Total Transmission (km)".to_string(),
            value: format_count(table.last_value(column)),
        });
    }

    if metrics.is_empty() {
        MetricsPanel::Unavailable {
            message: UNAVAILABLE_MESSAGE.to_string(),
        }
    } else {
        MetricsPanel::Ready { metrics }
    }
}

/// One decimal place, e.g. `123.4`
fn format_decimal(value: Option<f64>) -> String {
    value.map_or_else(|| MISSING_VALUE.to_string(), |v| format!("{v:.1}"))
}

/// One decimal place with a percent sign, e.g. `42.3%`
fn format_percent(value: Option<f64>) -> String {
    value.map_or_else(|| MISSING_VALUE.to_string(), |v| format!("{v:.1}%"))
}

/// Thousands-grouped rounded integer, e.g. `1,234,567`
#[allow(clippy::cast_possible_truncation)]
fn format_count(value: Option<f64>) -> String {
    value.map_or_else(
        || MISSING_VALUE.to_string(),
        |v| group_thousands(v.round() as i64),
    )
}

fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if n < 0 { format!("-{grouped}") } else { grouped }
}

//! Column-name resolution over a loosely specified schema
//!
//! Input datasets come from different eras of the utility's reporting
//! pipeline, so each logical metric is known under several historical
//! column names. Resolution walks a fixed priority list and returns the
//! first name present in the table. Absence is a normal outcome that
//! callers handle by omitting the metric or chart.

use crate::table::Table;

/// Ordered alias lists for the recognized logical metrics.
///
/// Order encodes precedence: the first name present wins, even when a
/// later alias also exists in the table.
pub mod alias {
    /// Monthly electricity consumption (GWh)
    pub const CONSUMPTION: &[&str] = &[
        "electricity_consumption_GWh",
        "Total_Consumption",
        "Consumption",
    ];

    /// Renewable share of generation (%)
    pub const RENEWABLE_SHARE: &[&str] =
        &["Renewable_Share_%", "Renewable_Share", "Renewable_Percentage"];

    /// Cumulative customer connections
    pub const CUSTOMERS: &[&str] = &["Cummulative_Connections", "Total_Customers", "Customers"];

    /// Total transmission length (km), as reported on the metrics strip
    pub const TRANSMISSION: &[&str] =
        &["Total HV and MV", "Total_Transmission", "Transmission_Total"];

    /// Total transmission length (km), as reported on the infrastructure view
    pub const TOTAL_INFRASTRUCTURE: &[&str] =
        &["Total HV and MV", "Total_Transmission", "Total_Infrastructure"];

    /// New customer connections per month
    pub const NEW_CUSTOMERS: &[&str] = &[
        "Number_of_new_customers",
        "New_Customers",
        "Monthly_New_Customers",
    ];

    /// Thermal generation (GWh)
    pub const THERMAL: &[&str] = &["Thermal", "THERMAL"];

    /// Imported energy (GWh)
    pub const IMPORTS: &[&str] = &["IMPORTS", "Imports"];

    /// Total generation (GWh)
    pub const TOTAL_GENERATION: &[&str] = &["Total", "total_generation"];

    /// Total renewable generation (GWh)
    pub const RENEWABLE_GENERATION: &[&str] =
        &["Renewable_Generation", "Total_Renewable", "Renewable_Total"];
}

/// Upper-cased names of generation source columns
pub const GENERATION_SOURCES: &[&str] = &[
    "HYDRO",
    "THERMAL",
    "WIND",
    "GEOTHERMAL",
    "SOLAR",
    "IMPORTS",
    "BAGASSE_BIOGAS",
];

/// Upper-cased names of renewable source columns
pub const RENEWABLE_SOURCES: &[&str] =
    &["HYDRO", "WIND", "GEOTHERMAL", "SOLAR", "BAGASSE_BIOGAS"];

/// Substrings marking voltage/transmission infrastructure columns.
/// Matching is case-sensitive; the mixed-case pairs cover the variants
/// seen in real exports.
pub const INFRASTRUCTURE_MARKERS: &[&str] = &["kV", "KV", "voltage", "transmission", "line"];

/// Resolve the first alias present in the table, in list order.
///
/// Returns `None` when no alias matches; callers degrade by skipping the
/// metric or chart.
#[must_use]
pub fn resolve<'a>(table: &Table, aliases: &[&'a str]) -> Option<&'a str> {
    aliases.iter().copied().find(|name| table.has_column(name))
}

/// Columns whose upper-cased name appears in `names`, in table order
#[must_use]
pub fn columns_in_set(table: &Table, names: &[&str]) -> Vec<String> {
    table
        .column_names()
        .filter(|column| {
            let upper = column.to_uppercase();
            names.iter().any(|name| *name == upper)
        })
        .map(str::to_string)
        .collect()
}

/// Columns whose name contains any of `markers` (case-sensitive), in table order
#[must_use]
pub fn columns_with_markers(table: &Table, markers: &[&str]) -> Vec<String> {
    table
        .column_names()
        .filter(|column| markers.iter().any(|marker| column.contains(marker)))
        .map(str::to_string)
        .collect()
}

/// Tariff-related columns: names containing `tariff` or `rate`
/// (case-insensitive) or the exact fragment `per_kWh`
#[must_use]
pub fn tariff_columns(table: &Table) -> Vec<String> {
    table
        .column_names()
        .filter(|column| {
            let lower = column.to_lowercase();
            lower.contains("tariff") || lower.contains("rate") || column.contains("per_kWh")
        })
        .map(str::to_string)
        .collect()
}

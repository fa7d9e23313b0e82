//! Columnar month-keyed record table

use chrono::NaiveDate;
use indexmap::IndexMap;

/// Canonical name of the temporal key column
pub const TEMPORAL_COLUMN: &str = "Month";

/// In-memory record table: one temporal key column plus zero or more
/// numeric series, all the same length, in source order.
///
/// Built once at startup by the loader and treated as immutable afterwards.
/// Filtering derives new tables; nothing mutates the source.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    months: Vec<NaiveDate>,
    series: IndexMap<String, Vec<Option<f64>>>,
}

impl Table {
    /// Assemble a table from a temporal column and aligned numeric series.
    ///
    /// Every series must have exactly `months.len()` entries; the loader
    /// guarantees this and test fixtures are expected to as well.
    #[must_use]
    pub fn new(months: Vec<NaiveDate>, series: IndexMap<String, Vec<Option<f64>>>) -> Self {
        debug_assert!(
            series.values().all(|values| values.len() == months.len()),
            "series length must match temporal column length"
        );
        Self { months, series }
    }

    /// Number of rows
    #[must_use]
    pub fn len(&self) -> usize {
        self.months.len()
    }

    /// Whether the table holds no rows
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    /// The temporal key column, in row order
    #[must_use]
    pub fn months(&self) -> &[NaiveDate] {
        &self.months
    }

    /// Names of the numeric columns, in source order
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.series.keys().map(String::as_str)
    }

    /// Whether a numeric column with this exact name exists
    #[must_use]
    pub fn has_column(&self, name: &str) -> bool {
        self.series.contains_key(name)
    }

    /// Values of one numeric column, aligned with [`Self::months`]
    #[must_use]
    pub fn series(&self, name: &str) -> Option<&[Option<f64>]> {
        self.series.get(name).map(Vec::as_slice)
    }

    /// All numeric columns as `(name, values)` pairs, in source order
    pub fn columns(&self) -> impl Iterator<Item = (&str, &[Option<f64>])> {
        self.series
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }

    /// Number of numeric columns
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.series.len()
    }

    /// Earliest and latest month present, or `None` for an empty table
    #[must_use]
    pub fn span(&self) -> Option<(NaiveDate, NaiveDate)> {
        let min = self.months.iter().min()?;
        let max = self.months.iter().max()?;
        Some((*min, *max))
    }

    /// Value of `name` in the last row (source order), flattened over
    /// column absence and cell missingness
    #[must_use]
    pub fn last_value(&self, name: &str) -> Option<f64> {
        self.series.get(name)?.last().copied().flatten()
    }
}

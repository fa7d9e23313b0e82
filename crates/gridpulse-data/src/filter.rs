//! Inclusive date-range filtering over the temporal key

use crate::table::Table;
use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Inclusive bounds on the temporal key.
///
/// `start > end` is not an error; it simply selects nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// First month kept (inclusive)
    pub start: NaiveDate,
    /// Last month kept (inclusive)
    pub end: NaiveDate,
}

impl DateRange {
    /// Create a range from inclusive bounds
    #[must_use]
    pub const fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Whether `date` falls within the bounds
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Keep the rows whose month lies within `range`.
///
/// Pure selection: the source table is untouched and the result is a new
/// table preserving row and column order. An empty result is valid and
/// every consumer renders it as "no data" rather than erroring.
#[must_use]
pub fn filter(table: &Table, range: DateRange) -> Table {
    let kept: Vec<usize> = table
        .months()
        .iter()
        .enumerate()
        .filter(|(_, month)| range.contains(**month))
        .map(|(idx, _)| idx)
        .collect();

    let months: Vec<NaiveDate> = kept.iter().map(|&idx| table.months()[idx]).collect();

    let series: IndexMap<String, Vec<Option<f64>>> = table
        .columns()
        .map(|(name, values)| {
            let selected: Vec<Option<f64>> = kept.iter().map(|&idx| values[idx]).collect();
            (name.to_string(), selected)
        })
        .collect();

    Table::new(months, series)
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use indexmap::IndexMap;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn month(y: i32, m: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, 1).unwrap()
    }

    fn sample_table() -> Table {
        let months = vec![
            month(2024, 1),
            month(2024, 2),
            month(2024, 3),
            month(2024, 4),
        ];
        let mut series = IndexMap::new();
        series.insert(
            "Hydro".to_string(),
            vec![Some(1.0), Some(2.0), None, Some(4.0)],
        );
        Table::new(months, series)
    }

    #[test]
    fn test_filter_inclusive_bounds() {
        let table = sample_table();

        let filtered = filter(&table, DateRange::new(month(2024, 2), month(2024, 3)));

        assert_eq!(filtered.months(), &[month(2024, 2), month(2024, 3)]);
        assert_eq!(filtered.series("Hydro").unwrap(), &[Some(2.0), None]);
    }

    #[test]
    fn test_filter_full_span_keeps_everything() {
        let table = sample_table();

        let filtered = filter(&table, DateRange::new(month(2024, 1), month(2024, 4)));

        assert_eq!(filtered, table);
    }

    #[test]
    fn test_filter_inverted_range_is_empty() {
        let table = sample_table();

        let filtered = filter(&table, DateRange::new(month(2024, 4), month(2024, 1)));

        assert!(filtered.is_empty());
        assert_eq!(filtered.series("Hydro").unwrap(), &[]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let table = sample_table();
        let range = DateRange::new(month(2024, 2), month(2024, 4));

        let once = filter(&table, range);
        let twice = filter(&once, range);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_filter_does_not_mutate_source() {
        let table = sample_table();
        let before = table.clone();

        let _ = filter(&table, DateRange::new(month(2024, 2), month(2024, 2)));

        assert_eq!(table, before);
    }

    proptest! {
        #[test]
        fn prop_filter_idempotent(
            start_offset in 0i64..60,
            end_offset in 0i64..60,
            row_offsets in proptest::collection::vec(0i64..60, 0..40),
        ) {
            let base = month(2020, 1);
            let months: Vec<NaiveDate> = row_offsets
                .iter()
                .map(|days| base + chrono::Duration::days(*days))
                .collect();
            let values: Vec<Option<f64>> =
                (0..months.len()).map(|i| Some(i as f64)).collect();
            let mut series = IndexMap::new();
            series.insert("X".to_string(), values);
            let table = Table::new(months, series);

            let range = DateRange::new(
                base + chrono::Duration::days(start_offset),
                base + chrono::Duration::days(end_offset),
            );

            let once = filter(&table, range);
            let twice = filter(&once, range);

            prop_assert_eq!(&once, &twice);

            // Every kept month is within bounds.
            prop_assert!(once.months().iter().all(|m| range.contains(*m)));
        }
    }
}

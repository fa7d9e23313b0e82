//! Dataset loading and normalization
//!
//! Reads the delimited source file once at startup. The temporal column is
//! located under one of the accepted names and normalized to the canonical
//! [`TEMPORAL_COLUMN`]; every other column is coerced cell-wise to numeric,
//! with unparseable cells becoming missing values. No row is ever dropped.

use crate::table::{TEMPORAL_COLUMN, Table};
use chrono::NaiveDate;
use gridpulse_core::{Error, Result};
use indexmap::IndexMap;
use std::path::Path;
use tracing::{debug, info};

/// Column names accepted for the temporal key, in preference order.
/// `Date` is renamed to the canonical `Month` after loading.
pub const TEMPORAL_ALIASES: &[&str] = &[TEMPORAL_COLUMN, "Date"];

/// Full-date formats tried in order for temporal cells
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d/%m/%Y"];

/// Tokens treated as missing in numeric cells
const NA_TOKENS: &[&str] = &["NA", "N/A", "na", "n/a", "null", "NULL", "-"];

/// Load and normalize the dataset.
///
/// # Errors
///
/// Missing file, CSV-level failures, an absent temporal column, and any
/// unparseable temporal cell are fatal; the dashboard cannot render
/// without a complete temporal axis. Everything else degrades to missing
/// values.
pub fn load(path: &Path) -> Result<Table> {
    if !path.exists() {
        return Err(Error::DatasetNotFound {
            path: path.to_path_buf(),
        });
    }

    let mut reader = csv::Reader::from_path(path)?;
    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

    let temporal_idx = TEMPORAL_ALIASES
        .iter()
        .find_map(|name| headers.iter().position(|header| header == name))
        .ok_or_else(|| Error::TemporalColumnMissing {
            expected: TEMPORAL_ALIASES.join(", "),
        })?;
    debug!(
        column = %headers[temporal_idx],
        "temporal column located"
    );

    // Keep the first occurrence of each column name; a duplicated header
    // would otherwise misalign the series.
    let mut seen: Vec<&str> = Vec::with_capacity(headers.len());
    let keep: Vec<bool> = headers
        .iter()
        .enumerate()
        .map(|(idx, header)| {
            if idx == temporal_idx || seen.contains(&header.as_str()) {
                false
            } else {
                seen.push(header.as_str());
                true
            }
        })
        .collect();

    let mut months: Vec<NaiveDate> = Vec::new();
    let mut columns: Vec<Vec<Option<f64>>> = headers.iter().map(|_| Vec::new()).collect();

    for (row, record) in reader.records().enumerate() {
        let record = record?;

        let raw = record.get(temporal_idx).unwrap_or("");
        let month = parse_month(raw).ok_or_else(|| Error::InvalidMonth {
            row,
            value: raw.to_string(),
        })?;
        months.push(month);

        for (idx, values) in columns.iter_mut().enumerate() {
            if keep[idx] {
                values.push(parse_numeric(record.get(idx).unwrap_or("")));
            }
        }
    }

    let series: IndexMap<String, Vec<Option<f64>>> = headers
        .iter()
        .zip(columns)
        .enumerate()
        .filter(|(idx, _)| keep[*idx])
        .map(|(_, (header, values))| (header.clone(), values))
        .collect();

    info!(
        rows = months.len(),
        columns = series.len(),
        path = %path.display(),
        "dataset loaded"
    );

    Ok(Table::new(months, series))
}

/// Parse a temporal cell against the accepted formats.
///
/// Year-month values without a day ("2024-03") normalize to the first of
/// the month.
#[must_use]
pub fn parse_month(value: &str) -> Option<NaiveDate> {
    let value = value.trim();

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return Some(date);
        }
    }

    NaiveDate::parse_from_str(&format!("{value}-01"), "%Y-%m-%d").ok()
}

/// Coerce a cell to numeric, treating empty cells, NA markers, and
/// unparseable tokens as missing. Thousands separators are tolerated.
#[must_use]
pub fn parse_numeric(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() || NA_TOKENS.contains(&trimmed) {
        return None;
    }

    trimmed.replace(',', "").parse::<f64>().ok()
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn month(y: i32, m: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, 1).unwrap()
    }

    fn write_csv(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(contents.as_bytes())
            .expect("Failed to write csv");
        file
    }

    #[test]
    fn test_load_basic_dataset() {
        let file = write_csv(
            "Month,Hydro,Wind\n\
             2024-01-01,20.5,15.0\n\
             2024-02-01,22.0,14.2\n",
        );

        let table = load(file.path()).expect("load failed");

        assert_eq!(table.len(), 2);
        assert_eq!(table.months(), &[month(2024, 1), month(2024, 2)]);
        assert_eq!(table.series("Hydro").unwrap(), &[Some(20.5), Some(22.0)]);
        assert_eq!(table.series("Wind").unwrap(), &[Some(15.0), Some(14.2)]);
    }

    #[test]
    fn test_load_renames_date_to_month() {
        let file = write_csv(
            "Date,Consumption\n\
             2024-01-01,100.0\n",
        );

        let table = load(file.path()).expect("load failed");

        assert_eq!(table.months(), &[month(2024, 1)]);
        assert!(table.has_column("Consumption"));
        // The temporal column never appears among numeric series.
        assert!(!table.has_column("Date"));
        assert!(!table.has_column(TEMPORAL_COLUMN));
    }

    #[test]
    fn test_load_prefers_month_over_date() {
        let file = write_csv(
            "Date,Month,X\n\
             1999-01-01,2024-01-01,1\n",
        );

        let table = load(file.path()).expect("load failed");

        // "Month" is the temporal key; "Date" is demoted to an ordinary
        // column whose cells fail numeric coercion.
        assert_eq!(table.months(), &[month(2024, 1)]);
        assert_eq!(table.series("Date").unwrap(), &[None]);
    }

    #[test]
    fn test_load_coerces_bad_cell_only() {
        let file = write_csv(
            "Month,Hydro\n\
             2024-01-01,20.5\n\
             2024-02-01,oops\n\
             2024-03-01,21.0\n",
        );

        let table = load(file.path()).expect("load failed");

        // Only the unparseable cell becomes missing; siblings stay parsed
        // and no row is dropped.
        assert_eq!(table.len(), 3);
        assert_eq!(
            table.series("Hydro").unwrap(),
            &[Some(20.5), None, Some(21.0)]
        );
    }

    #[test]
    fn test_load_missing_file_is_fatal() {
        let result = load(Path::new("/nonexistent/energy.csv"));

        assert!(matches!(result, Err(Error::DatasetNotFound { .. })));
    }

    #[test]
    fn test_load_missing_temporal_column_is_fatal() {
        let file = write_csv(
            "Hydro,Wind\n\
             20.5,15.0\n",
        );

        let result = load(file.path());

        assert!(matches!(result, Err(Error::TemporalColumnMissing { .. })));
    }

    #[test]
    fn test_load_unparseable_month_is_fatal() {
        let file = write_csv(
            "Month,Hydro\n\
             2024-01-01,20.5\n\
             not-a-month,21.0\n",
        );

        let result = load(file.path());

        match result {
            Err(Error::InvalidMonth { row, value }) => {
                assert_eq!(row, 1);
                assert_eq!(value, "not-a-month");
            }
            other => panic!("expected InvalidMonth, got {other:?}"),
        }
    }

    #[test]
    fn test_load_duplicate_header_keeps_first() {
        let file = write_csv(
            "Month,Hydro,Hydro\n\
             2024-01-01,1.0,2.0\n",
        );

        let table = load(file.path()).expect("load failed");

        assert_eq!(table.column_count(), 1);
        assert_eq!(table.series("Hydro").unwrap(), &[Some(1.0)]);
    }

    #[test]
    fn test_parse_month_formats() {
        assert_eq!(parse_month("2024-03-01"), Some(month(2024, 3)));
        assert_eq!(parse_month("2024/03/01"), Some(month(2024, 3)));
        assert_eq!(parse_month("03/01/2024"), Some(month(2024, 3)));
        assert_eq!(parse_month("2024-03"), Some(month(2024, 3)));
        assert_eq!(parse_month(" 2024-03-01 "), Some(month(2024, 3)));
        assert_eq!(parse_month("March 2024"), None);
        assert_eq!(parse_month(""), None);
    }

    #[test]
    fn test_parse_numeric() {
        assert_eq!(parse_numeric("42"), Some(42.0));
        assert_eq!(parse_numeric("42.5"), Some(42.5));
        assert_eq!(parse_numeric("-3.25"), Some(-3.25));
        assert_eq!(parse_numeric("1,234.5"), Some(1234.5));
        assert_eq!(parse_numeric("  7 "), Some(7.0));
        assert_eq!(parse_numeric(""), None);
        assert_eq!(parse_numeric("N/A"), None);
        assert_eq!(parse_numeric("null"), None);
        assert_eq!(parse_numeric("-"), None);
        assert_eq!(parse_numeric("abc"), None);
    }
}

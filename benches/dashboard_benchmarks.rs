//! Benchmarks for the filter and render hot path

use chrono::NaiveDate;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use gridpulse_data::{DateRange, Table, filter};
use gridpulse_views::{Tab, render};
use indexmap::IndexMap;

/// Build a synthetic table of `rows` months across a realistic column set
fn synthetic_table(rows: usize) -> Table {
    let base = NaiveDate::from_ymd_opt(2000, 1, 1).expect("valid date");
    let months: Vec<NaiveDate> = (0..rows)
        .map(|idx| base + chrono::Months::new(u32::try_from(idx).expect("row count fits u32")))
        .collect();

    let columns = [
        "electricity_consumption_GWh",
        "Renewable_Share_%",
        "Cummulative_Connections",
        "Total HV and MV",
        "Number_of_new_customers",
        "Hydro",
        "Thermal",
        "Wind",
        "Geothermal",
        "Solar",
        "IMPORTS",
        "Total",
        "Renewable_Generation",
        "Residential_tariff",
        "Commercial_tariff",
        "66kV_length",
        "33kV_length",
    ];

    let series: IndexMap<String, Vec<Option<f64>>> = columns
        .iter()
        .enumerate()
        .map(|(column_idx, name)| {
            let values = (0..rows)
                .map(|row| {
                    // Every 97th cell is missing, roughly matching real
                    // exports.
                    if (row + column_idx) % 97 == 0 {
                        None
                    } else {
                        Some((row * (column_idx + 1)) as f64 * 0.5)
                    }
                })
                .collect();
            ((*name).to_string(), values)
        })
        .collect();

    Table::new(months, series)
}

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter");

    for rows in [120_usize, 600, 2400] {
        let table = synthetic_table(rows);
        let (start, end) = table.span().expect("non-empty table");
        let mid = start + chrono::Months::new(u32::try_from(rows / 2).expect("fits u32"));
        let range = DateRange::new(mid, end);

        group.bench_with_input(BenchmarkId::new("half_span", rows), &table, |b, table| {
            b.iter(|| filter(table, range));
        });

        let full = DateRange::new(start, end);
        group.bench_with_input(BenchmarkId::new("full_span", rows), &table, |b, table| {
            b.iter(|| filter(table, full));
        });
    }

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");

    let table = synthetic_table(600);
    let (start, end) = table.span().expect("non-empty table");
    let range = DateRange::new(start, end);

    for tab in Tab::ALL {
        group.bench_with_input(BenchmarkId::new("tab", tab.as_str()), &table, |b, table| {
            b.iter(|| render(table, tab, range));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_filter, bench_render);
criterion_main!(benches);

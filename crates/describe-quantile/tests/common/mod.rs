//! Common test utilities for describe-quantile tests

#![allow(dead_code)]

use describe_core::{QuantileResult, Table};
use tracing_subscriber::EnvFilter;

/// Table with a single numeric column named `values`
pub fn single_column_table(values: &[f64]) -> Table {
    Table::new().with_numeric("values", values.iter().copied()).unwrap()
}

/// Histogram-style table with `value` and `count` columns
pub fn histogram_table(values: &[f64], counts: &[f64]) -> Table {
    Table::new()
        .with_numeric("value", values.iter().copied())
        .unwrap()
        .with_numeric("count", counts.iter().copied())
        .unwrap()
}

/// Defined cells of a result column, panicking on undefined ones
pub fn defined_cells(result: &QuantileResult, column: &str) -> Vec<f64> {
    result
        .column(column)
        .unwrap()
        .iter()
        .map(|cell| cell.expect("undefined cell"))
        .collect()
}

/// Install a test subscriber so `tracing` output shows up with `--nocapture`
///
/// Honours `RUST_LOG`, falling back to trace output for this crate.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("describe_quantile=trace"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

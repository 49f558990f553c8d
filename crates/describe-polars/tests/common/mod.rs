//! Common test utilities for describe-polars tests

#![allow(dead_code)]

use describe_polars::LABEL_COLUMN;
use polars::prelude::*;

/// Row labels of a summary frame
pub fn labels(df: &DataFrame) -> Vec<String> {
    df.column(LABEL_COLUMN)
        .unwrap()
        .str()
        .unwrap()
        .into_iter()
        .map(|label| label.unwrap().to_string())
        .collect()
}

/// Cells of one summary column, nulls as `None`
pub fn cells(df: &DataFrame, col_name: &str) -> Vec<Option<f64>> {
    df.column(col_name)
        .unwrap()
        .f64()
        .unwrap()
        .into_iter()
        .collect()
}

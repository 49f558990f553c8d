//! Extension trait for quantile summaries of Polars DataFrames

use describe_quantile::{DescribeOptions, WeightedDescribeOptions};
use polars::prelude::*;

use crate::Result;

/// Quantile summaries directly on a `DataFrame`
///
/// Both methods return a frame with a `percentile` label column followed by
/// one nullable `Float64` column per analysed column.
pub trait DescribeQuantilesExt {
    /// Percentiles of every numeric column
    ///
    /// # Arguments
    /// * `options` - Percentiles and rounding precision
    ///
    /// # Returns
    /// DataFrame with one row per percentile, labelled e.g. `"0.25"`
    fn describe_quantiles(&self, options: &DescribeOptions) -> Result<DataFrame>;

    /// Weighted mean and percentiles of pre-aggregated rows
    ///
    /// # Arguments
    /// * `weight_column` - Column holding the count of each row
    /// * `value_columns` - Columns to summarise
    /// * `options` - Percentiles to estimate
    ///
    /// # Returns
    /// DataFrame whose first row is `"mean"`, followed by one row per
    /// percentile; undefined estimates are null
    fn describe_weighted_quantiles(
        &self,
        weight_column: &str,
        value_columns: &[&str],
        options: &WeightedDescribeOptions,
    ) -> Result<DataFrame>;
}

//! Quantile summary implementations

use describe_quantile::{DescribeOptions, WeightedDescribeOptions};
use polars::prelude::*;
use tracing::debug;

use crate::convert::{frame_from_result, table_from_frame, table_from_frame_columns};
use crate::{DescribeQuantilesExt, Result};

impl DescribeQuantilesExt for DataFrame {
    fn describe_quantiles(&self, options: &DescribeOptions) -> Result<DataFrame> {
        let table = table_from_frame(self)?;
        let result = describe_quantile::describe_quantiles(&table, options)?;
        debug!(shape = ?result.shape(), "described frame");
        frame_from_result(&result)
    }

    fn describe_weighted_quantiles(
        &self,
        weight_column: &str,
        value_columns: &[&str],
        options: &WeightedDescribeOptions,
    ) -> Result<DataFrame> {
        let mut names = Vec::with_capacity(value_columns.len() + 1);
        names.push(weight_column);
        names.extend_from_slice(value_columns);

        let table = table_from_frame_columns(self, &names)?;
        let result = describe_quantile::describe_weighted_quantiles(
            &table,
            weight_column,
            value_columns,
            options,
        )?;
        debug!(shape = ?result.shape(), "described weighted frame");
        frame_from_result(&result)
    }
}

//! Quantile summaries of tabular data
//!
//! Facade over the workspace crates:
//!
//! - [`describe_core`]: tables, percentile lists, results and errors
//! - [`describe_quantile`]: unweighted and weighted estimators
//! - `describe_polars` (feature `polars`): the same summaries on Polars DataFrames
//!
//! # Example
//!
//! ```rust
//! use describe_stats::prelude::*;
//!
//! let table = Table::new()
//!     .with_numeric("value", [10.0, 20.0, 30.0, 40.0]).unwrap()
//!     .with_numeric("count", [1.0, 1.0, 1.0, 1.0]).unwrap();
//!
//! let options = WeightedDescribeOptions::new().with_fractions(vec![0.5]).unwrap();
//! let summary = describe_weighted_quantiles(&table, "count", &["value"], &options).unwrap();
//! assert_eq!(summary.get("mean", "value"), Some(25.0));
//! assert_eq!(summary.get("0.5", "value"), Some(20.0));
//! ```

pub use describe_core;
pub use describe_quantile;

#[cfg(feature = "polars")]
pub use describe_polars;

pub use describe_core::{Column, ColumnValues, Error, PercentileSpec, QuantileResult, Result, RowLabel, Table};
pub use describe_quantile::{
    describe_quantiles, describe_weighted_quantiles, DescribeOptions, LinearQuantile,
    QuantileEstimator, WeightedDescribeOptions, WeightedQuantile,
};

/// Prelude for convenient imports
pub mod prelude {
    pub use describe_quantile::prelude::*;
}

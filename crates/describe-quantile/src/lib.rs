//! Quantile summaries of tabular data
//!
//! Two estimators share one contract, a [`Table`], target columns and a
//! [`PercentileSpec`], and one output shape, a [`QuantileResult`] with a row
//! per percentile and a column per analysed value column.
//!
//! - [`describe_quantiles`]: linear-interpolation sample quantiles of every
//!   numeric column, one observation per row
//! - [`describe_weighted_quantiles`]: weighted mean and cumulative-weight
//!   quantiles for pre-aggregated rows, where a weight column holds counts
//!
//! Both are pure functions: no I/O, no shared state.
//!
//! # Example
//!
//! ```rust
//! use describe_quantile::prelude::*;
//!
//! let table = Table::new()
//!     .with_numeric("latency", [12.0, 15.0, 11.0, 30.0, 14.0])
//!     .unwrap();
//!
//! let summary = describe_quantiles(&table, &DescribeOptions::default()).unwrap();
//! assert_eq!(summary.shape(), (5, 1));
//! assert_eq!(summary.get("0.5", "latency"), Some(14.0));
//! ```

pub mod config;
pub mod describe;
pub mod estimators;
pub mod traits;

pub use config::{DescribeOptions, WeightedDescribeOptions, DEFAULT_ROUNDING};
pub use describe::{describe_quantiles, describe_quantiles_with, describe_weighted_quantiles};
pub use estimators::{LinearQuantile, WeightedQuantile, Weights};
pub use traits::QuantileEstimator;

pub use describe_core::{Error, PercentileSpec, QuantileResult, Result, RowLabel, Table};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        describe_quantiles, describe_weighted_quantiles, DescribeOptions, Error,
        LinearQuantile, PercentileSpec, QuantileEstimator, QuantileResult, Result, RowLabel,
        Table, WeightedDescribeOptions, WeightedQuantile,
    };
}

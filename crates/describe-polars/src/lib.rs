//! Polars integration for quantile summaries
//!
//! This crate converts Polars DataFrames into describe tables, runs the
//! quantile summaries and hands the result back as a DataFrame, through a
//! single extension trait.
//!
//! # Example
//!
//! ```rust,ignore
//! use polars::prelude::*;
//! use describe_polars::{DescribeQuantilesExt, DescribeOptions, WeightedDescribeOptions};
//!
//! let df = df![
//!     "value" => [10.0, 20.0, 30.0, 40.0],
//!     "count" => [1.0, 1.0, 1.0, 1.0],
//! ]?;
//!
//! let summary = df.describe_quantiles(&DescribeOptions::default())?;
//! let weighted = df.describe_weighted_quantiles(
//!     "count",
//!     &["value"],
//!     &WeightedDescribeOptions::default(),
//! )?;
//! ```

mod convert;
mod error;
mod methods;
mod traits;

pub use convert::{frame_from_result, table_from_frame, table_from_frame_columns, LABEL_COLUMN};
pub use error::{Error, Result};
pub use traits::*;

// Re-export commonly used types from dependencies
pub use describe_quantile::{DescribeOptions, PercentileSpec, WeightedDescribeOptions};

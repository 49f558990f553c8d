//! Core types for quantile summaries of tabular data
//!
//! This crate holds what every describe-stats crate shares:
//!
//! - [`Table`]: the in-memory input, a set of named numeric and non-numeric columns
//! - [`PercentileSpec`]: a validated list of percentile fractions
//! - [`QuantileResult`]: the output, rows labelled by percentile
//! - [`Error`]: invalid-argument failures
//!
//! # Example
//!
//! ```rust
//! use describe_core::{PercentileSpec, Table};
//!
//! let table = Table::new()
//!     .with_numeric("value", [10.0, 20.0, 30.0])
//!     .unwrap()
//!     .with_text("label", [Some("a"), Some("b"), None])
//!     .unwrap();
//!
//! assert_eq!(table.numeric_columns().count(), 1);
//! assert_eq!(PercentileSpec::default().len(), 5);
//! ```

pub mod error;
pub mod percentiles;
pub mod result;
pub mod table;
pub mod utils;

pub use error::{Error, Result};
pub use percentiles::{PercentileSpec, DEFAULT_PERCENTILES};
pub use result::{QuantileResult, ResultColumn, RowLabel};
pub use table::{Column, ColumnValues, Table};

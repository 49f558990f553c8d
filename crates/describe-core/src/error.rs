//! Error types for quantile summaries
//!
//! Provides a unified error type for all describe-stats crates. Every variant
//! is an invalid-argument failure: the input was rejected before any
//! computation started. Undefined quantile cells are not errors, they are
//! `None` cells in the result.

use thiserror::Error;

/// Core error type for quantile summary operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// No percentiles were requested
    #[error("Invalid argument: percentile list must not be empty")]
    EmptyPercentiles,

    /// A percentile outside [0, 1] or not a finite number
    #[error("Invalid argument: percentile {p} must be a finite number in [0, 1]")]
    InvalidPercentile { p: f64 },

    /// A named column does not exist in the table
    #[error("Invalid argument: column '{0}' not found")]
    ColumnNotFound(String),

    /// A named column exists but does not hold numbers
    #[error("Invalid argument: column '{0}' is not numeric")]
    NonNumericColumn(String),

    /// A column with the same name is already present
    #[error("Invalid argument: duplicate column '{0}'")]
    DuplicateColumn(String),

    /// A column does not match the table height
    #[error("Invalid argument: column '{column}' has {actual} rows, expected {expected}")]
    LengthMismatch {
        column: String,
        expected: usize,
        actual: usize,
    },

    /// The weighted summary was asked for no value columns
    #[error("Invalid argument: at least one value column is required")]
    NoValueColumns,

    /// The weight column sums to zero
    #[error("Invalid argument: weight column '{column}' sums to zero")]
    ZeroWeightSum { column: String },
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Whether this error rejects the caller's arguments.
    ///
    /// Every current variant does; the method exists so callers can branch
    /// on the failure class without matching each variant.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Error::EmptyPercentiles
                | Error::InvalidPercentile { .. }
                | Error::ColumnNotFound(_)
                | Error::NonNumericColumn(_)
                | Error::DuplicateColumn(_)
                | Error::LengthMismatch { .. }
                | Error::NoValueColumns
                | Error::ZeroWeightSum { .. }
        )
    }

    /// Check that a percentile fraction is usable
    pub fn check_percentile(p: f64) -> Result<()> {
        if !p.is_finite() || !(0.0..=1.0).contains(&p) {
            return Err(Error::InvalidPercentile { p });
        }
        Ok(())
    }
}

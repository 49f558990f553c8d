//! Configuration types for quantile summaries

use describe_core::{PercentileSpec, Result};
use serde::{Deserialize, Serialize};

/// Decimal places applied to unweighted estimates by default
pub const DEFAULT_ROUNDING: i32 = 2;

/// Options for [`describe_quantiles`](crate::describe_quantiles)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DescribeOptions {
    /// Fractions to estimate
    pub percentiles: PercentileSpec,

    /// Decimal places each estimate is rounded to (ties to even)
    pub rounding: i32,
}

impl Default for DescribeOptions {
    fn default() -> Self {
        Self {
            percentiles: PercentileSpec::default(),
            rounding: DEFAULT_ROUNDING,
        }
    }
}

impl DescribeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_percentiles(mut self, percentiles: PercentileSpec) -> Self {
        self.percentiles = percentiles;
        self
    }

    /// Validate `fractions` and use them as the percentiles
    pub fn with_fractions(self, fractions: Vec<f64>) -> Result<Self> {
        Ok(self.with_percentiles(PercentileSpec::new(fractions)?))
    }

    pub fn with_rounding(mut self, rounding: i32) -> Self {
        self.rounding = rounding;
        self
    }
}

/// Options for [`describe_weighted_quantiles`](crate::describe_weighted_quantiles)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeightedDescribeOptions {
    /// Fractions to estimate
    pub percentiles: PercentileSpec,
}

impl WeightedDescribeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_percentiles(mut self, percentiles: PercentileSpec) -> Self {
        self.percentiles = percentiles;
        self
    }

    /// Validate `fractions` and use them as the percentiles
    pub fn with_fractions(self, fractions: Vec<f64>) -> Result<Self> {
        Ok(self.with_percentiles(PercentileSpec::new(fractions)?))
    }
}

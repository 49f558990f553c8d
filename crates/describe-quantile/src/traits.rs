//! Estimator traits

use describe_core::PercentileSpec;

/// Per-column quantile estimation over unweighted samples
///
/// Implementors receive the raw column (missing values included) and
/// return one cell per requested fraction, in the order of `spec`.
/// A `None` cell means the estimate is undefined for that fraction.
pub trait QuantileEstimator {
    /// Estimate every fraction of `spec` for one column
    fn estimate(&self, values: &[Option<f64>], spec: &PercentileSpec) -> Vec<Option<f64>>;

    /// Short name used in logs
    fn name(&self) -> &'static str;
}

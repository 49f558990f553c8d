//! Linear-interpolation sample quantile
//!
//! The estimate at fraction `p` over `n` sorted values sits at position
//! `h = (n - 1) * p` and interpolates linearly between the two order
//! statistics around `h` (Hyndman & Fan type 7).

use describe_core::utils::sorted_complete;
use describe_core::PercentileSpec;

use crate::traits::QuantileEstimator;

/// Type-7 sample quantile estimator
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearQuantile;

impl LinearQuantile {
    pub fn new() -> Self {
        Self
    }

    /// Quantile of already sorted data. Returns `None` for empty input.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use describe_quantile::LinearQuantile;
    ///
    /// let data = [1.0, 2.0, 3.0, 4.0];
    /// assert_eq!(LinearQuantile::quantile_sorted(&data, 0.5), Some(2.5));
    /// assert_eq!(LinearQuantile::quantile_sorted(&data, 1.0), Some(4.0));
    /// assert_eq!(LinearQuantile::quantile_sorted(&[], 0.5), None);
    /// ```
    pub fn quantile_sorted(sorted: &[f64], p: f64) -> Option<f64> {
        let n = sorted.len();
        if n == 0 {
            return None;
        }

        let h = (n - 1) as f64 * p;
        let lower = (h.floor() as usize).min(n - 1);
        let upper = (lower + 1).min(n - 1);
        let t = h - lower as f64;

        if t == 0.0 {
            return Some(sorted[lower]);
        }
        Some(lerp(sorted[lower], sorted[upper], t))
    }

    /// Quantiles of one raw column.
    ///
    /// A single missing value, or an empty column, leaves every cell
    /// undefined.
    pub fn quantiles(values: &[Option<f64>], spec: &PercentileSpec) -> Vec<Option<f64>> {
        match sorted_complete(values) {
            Some(sorted) if !sorted.is_empty() => spec
                .iter()
                .map(|p| Self::quantile_sorted(&sorted, p))
                .collect(),
            _ => vec![None; spec.len()],
        }
    }
}

// Interpolates from the nearer end so results never leave [a, b].
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    let diff = b - a;
    if t < 0.5 {
        a + diff * t
    } else {
        b - diff * (1.0 - t)
    }
}

impl QuantileEstimator for LinearQuantile {
    fn estimate(&self, values: &[Option<f64>], spec: &PercentileSpec) -> Vec<Option<f64>> {
        Self::quantiles(values, spec)
    }

    fn name(&self) -> &'static str {
        "linear"
    }
}

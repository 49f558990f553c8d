//! Weighted quantiles over pre-aggregated rows
//!
//! Each row carries a value and a weight (a count or frequency). Rows are
//! sorted by value and the cumulative weight fraction is tracked per row;
//! the estimate at `p` is the largest value whose cumulative fraction does
//! not exceed `p`.
//!
//! Missing data follows two distinct rules:
//!
//! - In the weighted mean, a product with a missing side contributes zero to
//!   the numerator, while a present weight still counts in the denominator.
//! - In the cumulative fraction, a missing weight makes that row and every
//!   row sorted after it unknown. Unknown rows never satisfy a threshold.

use describe_core::utils::stable_sort_indices;
use describe_core::{Error, PercentileSpec, Result};

/// A weight column with a validated, non-zero total
#[derive(Debug, Clone)]
pub struct Weights<'a> {
    name: &'a str,
    values: &'a [Option<f64>],
    total: f64,
}

impl<'a> Weights<'a> {
    /// Wrap a weight column, rejecting a zero total.
    ///
    /// Missing weights are skipped when summing.
    pub fn new(name: &'a str, values: &'a [Option<f64>]) -> Result<Self> {
        let total: f64 = values.iter().flatten().sum();
        if total == 0.0 {
            return Err(Error::ZeroWeightSum {
                column: name.to_string(),
            });
        }
        Ok(Self { name, values, total })
    }

    pub fn name(&self) -> &str {
        self.name
    }

    pub fn values(&self) -> &[Option<f64>] {
        self.values
    }

    /// Sum of present weights
    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Cumulative weight distribution of one value column
#[derive(Debug, Clone)]
pub struct WeightedQuantile {
    mean: f64,
    /// Values in ascending order, missing values last
    sorted_values: Vec<Option<f64>>,
    /// Cumulative weight fraction per sorted row, `None` once poisoned
    prop_cum: Vec<Option<f64>>,
}

impl WeightedQuantile {
    /// Build the distribution of `values` under `weights`
    ///
    /// # Arguments
    /// * `column` - Name of the value column, used in errors
    /// * `values` - One value per row
    /// * `weights` - One weight per row
    pub fn new(column: &str, values: &[Option<f64>], weights: &Weights<'_>) -> Result<Self> {
        if values.len() != weights.len() {
            return Err(Error::LengthMismatch {
                column: column.to_string(),
                expected: weights.len(),
                actual: values.len(),
            });
        }

        let total = weights.total();
        let numerator: f64 = values
            .iter()
            .zip(weights.values())
            .map(|(v, w)| match (v, w) {
                (Some(v), Some(w)) => v * w,
                _ => 0.0,
            })
            .sum();

        let order = stable_sort_indices(values);
        // summed in the same order as the running sum so the last fraction is exactly 1
        let sorted_total: f64 = order.iter().filter_map(|&i| weights.values()[i]).sum();
        let mut running = Some(0.0);
        let mut sorted_values = Vec::with_capacity(order.len());
        let mut prop_cum = Vec::with_capacity(order.len());
        for i in order {
            running = running.zip(weights.values()[i]).map(|(acc, w)| acc + w);
            sorted_values.push(values[i]);
            prop_cum.push(running.map(|acc| acc / sorted_total));
        }

        Ok(Self {
            mean: numerator / total,
            sorted_values,
            prop_cum,
        })
    }

    /// Weighted mean, `sum(w * v) / sum(w)`
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Largest value whose cumulative fraction is at most `p`.
    ///
    /// `None` when no row qualifies, e.g. `p` below the first cumulative
    /// fraction or every fraction unknown.
    pub fn quantile(&self, p: f64) -> Option<f64> {
        self.sorted_values
            .iter()
            .zip(&self.prop_cum)
            .filter_map(|(value, cum)| match (value, cum) {
                (Some(v), Some(c)) if *c <= p => Some(*v),
                _ => None,
            })
            .reduce(f64::max)
    }

    pub fn quantiles(&self, spec: &PercentileSpec) -> Vec<Option<f64>> {
        spec.iter().map(|p| self.quantile(p)).collect()
    }

    /// `(value, cumulative fraction)` pairs in sorted order
    pub fn cumulative_fractions(&self) -> impl Iterator<Item = (Option<f64>, Option<f64>)> + '_ {
        self.sorted_values.iter().copied().zip(self.prop_cum.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn some(values: &[f64]) -> Vec<Option<f64>> {
        values.iter().copied().map(Some).collect()
    }

    #[test]
    fn test_uniform_weights() {
        let values = some(&[10.0, 20.0, 30.0, 40.0]);
        let weights = some(&[1.0, 1.0, 1.0, 1.0]);
        let weights = Weights::new("n", &weights).unwrap();
        let wq = WeightedQuantile::new("v", &values, &weights).unwrap();

        assert_relative_eq!(wq.mean(), 25.0);
        let fractions: Vec<_> = wq.cumulative_fractions().map(|(_, c)| c.unwrap()).collect();
        assert_eq!(fractions, vec![0.25, 0.5, 0.75, 1.0]);
        assert_eq!(wq.quantile(0.5), Some(20.0));
        assert_eq!(wq.quantile(0.1), None);
        assert_eq!(wq.quantile(1.0), Some(40.0));
    }

    #[test]
    fn test_unsorted_input() {
        let values = some(&[30.0, 10.0, 40.0, 20.0]);
        let weights = some(&[2.0, 1.0, 1.0, 4.0]);
        let weights = Weights::new("n", &weights).unwrap();
        let wq = WeightedQuantile::new("v", &values, &weights).unwrap();

        // sorted: 10 (1/8), 20 (5/8), 30 (7/8), 40 (1)
        assert_eq!(wq.quantile(0.125), Some(10.0));
        assert_eq!(wq.quantile(0.6), Some(10.0));
        assert_eq!(wq.quantile(0.625), Some(20.0));
        assert_eq!(wq.quantile(0.9), Some(30.0));
        assert_relative_eq!(wq.mean(), (60.0 + 10.0 + 40.0 + 80.0) / 8.0);
    }

    #[test]
    fn test_zero_weight_sum_rejected() {
        let weights = some(&[0.0, 0.0]);
        assert_eq!(
            Weights::new("n", &weights).unwrap_err(),
            Error::ZeroWeightSum { column: "n".into() }
        );

        let all_missing = vec![None, None];
        assert!(Weights::new("n", &all_missing).is_err());
    }

    #[test]
    fn test_missing_weight_poisons_later_rows() {
        let values = some(&[1.0, 2.0, 3.0, 4.0]);
        let weights = vec![Some(1.0), None, Some(1.0), Some(1.0)];
        let weights = Weights::new("n", &weights).unwrap();
        let wq = WeightedQuantile::new("v", &values, &weights).unwrap();

        let fractions: Vec<_> = wq.cumulative_fractions().map(|(_, c)| c).collect();
        assert_eq!(fractions, vec![Some(1.0 / 3.0), None, None, None]);
        assert_eq!(wq.quantile(1.0), Some(1.0));
        assert_eq!(wq.quantile(0.2), None);
        // Missing weight still leaves the mean defined
        assert_relative_eq!(wq.mean(), (1.0 + 3.0 + 4.0) / 3.0);
    }

    #[test]
    fn test_missing_value_contributes_zero_to_mean() {
        let values = vec![Some(10.0), None, Some(30.0)];
        let weights = some(&[1.0, 2.0, 1.0]);
        let weights = Weights::new("n", &weights).unwrap();
        let wq = WeightedQuantile::new("v", &values, &weights).unwrap();

        assert_relative_eq!(wq.mean(), 40.0 / 4.0);
        // Missing value sorts last and never becomes an estimate
        assert_eq!(wq.quantile(1.0), Some(30.0));
    }

    #[test]
    fn test_zero_percentile_needs_leading_zero_weight() {
        let values = some(&[5.0, 6.0, 7.0]);

        let weights = some(&[1.0, 1.0, 1.0]);
        let weights = Weights::new("n", &weights).unwrap();
        let wq = WeightedQuantile::new("v", &values, &weights).unwrap();
        assert_eq!(wq.quantile(0.0), None);

        let weights = some(&[0.0, 1.0, 1.0]);
        let weights = Weights::new("n", &weights).unwrap();
        let wq = WeightedQuantile::new("v", &values, &weights).unwrap();
        assert_eq!(wq.quantile(0.0), Some(5.0));
    }

    #[test]
    fn test_ties_keep_row_order() {
        let values = some(&[2.0, 1.0, 2.0]);
        let weights = some(&[3.0, 1.0, 6.0]);
        let weights = Weights::new("n", &weights).unwrap();
        let wq = WeightedQuantile::new("v", &values, &weights).unwrap();

        let fractions: Vec<_> = wq.cumulative_fractions().map(|(_, c)| c.unwrap()).collect();
        assert_eq!(fractions, vec![0.1, 0.4, 1.0]);
        assert_eq!(wq.quantile(0.4), Some(2.0));
        assert_eq!(wq.quantile(0.3), Some(1.0));
    }

    #[test]
    fn test_fractional_weights_reach_one() {
        let values = some(&[2.0, 3.0, 1.0]);
        let weights = some(&[0.2, 0.3, 0.1]);
        let weights = Weights::new("n", &weights).unwrap();
        let wq = WeightedQuantile::new("v", &values, &weights).unwrap();

        let (last_value, last_cum) = wq.cumulative_fractions().last().unwrap();
        assert_eq!(last_value, Some(3.0));
        assert_eq!(last_cum, Some(1.0));
        assert_eq!(wq.quantile(1.0), Some(3.0));
    }

    #[test]
    fn test_length_mismatch() {
        let weights = some(&[1.0, 1.0]);
        let weights = Weights::new("n", &weights).unwrap();
        let err = WeightedQuantile::new("v", &some(&[1.0]), &weights).unwrap_err();
        assert_eq!(
            err,
            Error::LengthMismatch { column: "v".into(), expected: 2, actual: 1 }
        );
    }
}

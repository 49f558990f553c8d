//! Validated lists of percentile fractions

use serde::{Deserialize, Serialize};

use crate::utils::{format_fraction, round_half_even};
use crate::{Error, Result};

/// Fractions used when the caller does not ask for specific percentiles
pub const DEFAULT_PERCENTILES: [f64; 5] = [0.05, 0.25, 0.5, 0.75, 0.95];

/// Decimal places used for percentile labels
const LABEL_DECIMALS: i32 = 2;

/// Ordered, non-empty list of fractions in [0, 1]
///
/// Duplicates are allowed and order is preserved for labelling. The only
/// way to obtain a value is through validation, so estimators never see an
/// out-of-range fraction.
///
/// # Examples
///
/// ```rust
/// use describe_core::PercentileSpec;
///
/// let spec = PercentileSpec::new(vec![0.1, 0.5, 0.9]).unwrap();
/// assert_eq!(spec.labels(), vec!["0.1", "0.5", "0.9"]);
///
/// assert!(PercentileSpec::new(vec![]).is_err());
/// assert!(PercentileSpec::new(vec![1.2]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct PercentileSpec {
    fractions: Vec<f64>,
}

impl PercentileSpec {
    /// Validate and wrap a list of fractions
    pub fn new(fractions: Vec<f64>) -> Result<Self> {
        if fractions.is_empty() {
            return Err(Error::EmptyPercentiles);
        }
        for &p in &fractions {
            Error::check_percentile(p)?;
        }
        Ok(Self { fractions })
    }

    pub fn fractions(&self) -> &[f64] {
        &self.fractions
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.fractions.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.fractions.len()
    }

    /// Whether there are no fractions
    pub fn is_empty(&self) -> bool {
        self.fractions.is_empty()
    }

    /// Row labels: each fraction rounded to two decimals, e.g. `"0.05"`.
    ///
    /// Labels are cosmetic and independent of how result values are rounded.
    pub fn labels(&self) -> Vec<String> {
        self.fractions
            .iter()
            .map(|&p| format_fraction(round_half_even(p, LABEL_DECIMALS)))
            .collect()
    }
}

impl Default for PercentileSpec {
    fn default() -> Self {
        Self {
            fractions: DEFAULT_PERCENTILES.to_vec(),
        }
    }
}

impl TryFrom<Vec<f64>> for PercentileSpec {
    type Error = Error;

    fn try_from(fractions: Vec<f64>) -> Result<Self> {
        Self::new(fractions)
    }
}

impl TryFrom<&[f64]> for PercentileSpec {
    type Error = Error;

    fn try_from(fractions: &[f64]) -> Result<Self> {
        Self::new(fractions.to_vec())
    }
}

impl From<PercentileSpec> for Vec<f64> {
    fn from(spec: PercentileSpec) -> Self {
        spec.fractions
    }
}

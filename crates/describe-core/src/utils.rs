//! Numeric helpers shared by the estimators

use ordered_float::OrderedFloat;

/// Round `x` to `decimals` places, ties to even.
///
/// Negative `decimals` round to tens, hundreds and so on. Non-finite
/// values are returned unchanged.
///
/// # Examples
///
/// ```rust
/// use describe_core::utils::round_half_even;
///
/// assert_eq!(round_half_even(2.3456, 2), 2.35);
/// assert_eq!(round_half_even(0.125, 2), 0.12);
/// assert_eq!(round_half_even(1250.0, -2), 1200.0);
/// ```
pub fn round_half_even(x: f64, decimals: i32) -> f64 {
    if !x.is_finite() {
        return x;
    }
    let factor = 10f64.powi(decimals.saturating_abs());
    if decimals >= 0 {
        let scaled = x * factor;
        if !scaled.is_finite() {
            // already exact at this precision
            return x;
        }
        scaled.round_ties_even() / factor
    } else if factor.is_infinite() {
        0.0f64.copysign(x)
    } else {
        let rounded = (x / factor).round_ties_even() * factor;
        if rounded.is_finite() {
            rounded
        } else {
            x
        }
    }
}

/// Format a fraction as its shortest decimal form, keeping at least one
/// fractional digit so that `1.0` never prints as `1`.
///
/// ```rust
/// use describe_core::utils::format_fraction;
///
/// assert_eq!(format_fraction(0.05), "0.05");
/// assert_eq!(format_fraction(1.0), "1.0");
/// assert_eq!(format_fraction(0.5), "0.5");
/// ```
pub fn format_fraction(x: f64) -> String {
    let mut s = x.to_string();
    if x.is_finite() && !s.contains('.') {
        s.push_str(".0");
    }
    s
}

/// Indices that sort `values` ascending with missing values last.
///
/// The sort is stable: equal values keep their original relative order.
pub fn stable_sort_indices(values: &[Option<f64>]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..values.len()).collect();
    indices.sort_by_key(|&i| (values[i].is_none(), values[i].map(OrderedFloat)));
    indices
}

/// Sort present values ascending. Returns `None` if any value is missing.
pub fn sorted_complete(values: &[Option<f64>]) -> Option<Vec<f64>> {
    let mut sorted: Vec<f64> = values.iter().copied().collect::<Option<Vec<_>>>()?;
    sorted.sort_by_key(|&v| OrderedFloat(v));
    Some(sorted)
}

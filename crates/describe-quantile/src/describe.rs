//! Table-level quantile summaries

use describe_core::utils::round_half_even;
use describe_core::{Error, QuantileResult, Result, RowLabel, Table};
use tracing::{debug, instrument, trace};

use crate::config::{DescribeOptions, WeightedDescribeOptions};
use crate::estimators::{LinearQuantile, WeightedQuantile, Weights};
use crate::traits::QuantileEstimator;

/// Percentiles of every numeric column of `table`
///
/// Rows are labelled by the percentile fractions rounded to two decimals,
/// columns follow the table's numeric columns in order. Each estimate is
/// the type-7 sample quantile rounded to `options.rounding` decimals.
/// Non-numeric columns are skipped.
///
/// # Example
///
/// ```rust
/// use describe_core::Table;
/// use describe_quantile::{describe_quantiles, DescribeOptions};
///
/// let table = Table::new().with_numeric("x", [1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
/// let options = DescribeOptions::new().with_fractions(vec![0.0, 0.5, 1.0]).unwrap();
///
/// let result = describe_quantiles(&table, &options).unwrap();
/// assert_eq!(result.column("x").unwrap(), &[Some(1.0), Some(3.0), Some(5.0)]);
/// ```
pub fn describe_quantiles(table: &Table, options: &DescribeOptions) -> Result<QuantileResult> {
    describe_quantiles_with(table, options, &LinearQuantile)
}

/// Same as [`describe_quantiles`] with a caller-supplied estimator
#[instrument(skip_all, fields(estimator = estimator.name(), rows = table.height()))]
pub fn describe_quantiles_with<E: QuantileEstimator>(
    table: &Table,
    options: &DescribeOptions,
    estimator: &E,
) -> Result<QuantileResult> {
    let spec = &options.percentiles;
    let labels = spec.labels().into_iter().map(RowLabel::Text).collect();
    let mut result = QuantileResult::new(labels);

    for (name, values) in table.numeric_columns() {
        let cells: Vec<Option<f64>> = estimator
            .estimate(values, spec)
            .into_iter()
            .map(|cell| cell.map(|x| round_half_even(x, options.rounding)))
            .collect();
        trace!(column = name, ?cells, "column quantiles");
        result.push_column(name, cells)?;
    }

    debug!(
        numeric_columns = result.n_cols(),
        skipped = table.width() - result.n_cols(),
        percentiles = spec.len(),
        "described table"
    );
    Ok(result)
}

/// Weighted mean and percentiles of `value_columns` under `weight_column`
///
/// The table is read as a histogram: each row is a value with a weight
/// (count). The first result row, `"mean"`, holds the weighted mean; the
/// following rows are labelled by the requested fractions and hold the
/// largest value whose cumulative weight fraction does not exceed the
/// fraction, or `None` when no row qualifies.
///
/// All arguments are checked before any column is computed. Repeated value
/// column names are summarised once.
///
/// # Errors
///
/// - [`Error::NoValueColumns`] if `value_columns` is empty
/// - [`Error::ColumnNotFound`] / [`Error::NonNumericColumn`] for a bad
///   weight or value column
/// - [`Error::ZeroWeightSum`] if the weights sum to zero
///
/// # Example
///
/// ```rust
/// use describe_core::Table;
/// use describe_quantile::{describe_weighted_quantiles, WeightedDescribeOptions};
///
/// let table = Table::new()
///     .with_numeric("value", [10.0, 20.0, 30.0, 40.0]).unwrap()
///     .with_numeric("count", [1.0, 1.0, 1.0, 1.0]).unwrap();
/// let options = WeightedDescribeOptions::new().with_fractions(vec![0.5]).unwrap();
///
/// let result = describe_weighted_quantiles(&table, "count", &["value"], &options).unwrap();
/// assert_eq!(result.get("mean", "value"), Some(25.0));
/// assert_eq!(result.get("0.5", "value"), Some(20.0));
/// ```
#[instrument(skip_all, fields(weight = weight_column, rows = table.height()))]
pub fn describe_weighted_quantiles<S: AsRef<str>>(
    table: &Table,
    weight_column: &str,
    value_columns: &[S],
    options: &WeightedDescribeOptions,
) -> Result<QuantileResult> {
    if value_columns.is_empty() {
        return Err(Error::NoValueColumns);
    }

    let mut names: Vec<&str> = Vec::with_capacity(value_columns.len());
    for name in value_columns {
        let name: &str = name.as_ref();
        if !names.contains(&name) {
            names.push(name);
        }
    }

    let weight_values = table.numeric_column(weight_column)?;
    let columns = names
        .iter()
        .map(|&name| table.numeric_column(name).map(|values| (name, values)))
        .collect::<Result<Vec<_>>>()?;
    let weights = Weights::new(weight_column, weight_values)?;
    debug!(
        value_columns = columns.len(),
        total_weight = weights.total(),
        "validated weighted summary"
    );

    let spec = &options.percentiles;
    let labels = std::iter::once(RowLabel::mean())
        .chain(spec.iter().map(RowLabel::Fraction))
        .collect();
    let mut result = QuantileResult::new(labels);

    for (name, values) in columns {
        let distribution = WeightedQuantile::new(name, values, &weights)?;
        let mut cells = Vec::with_capacity(spec.len() + 1);
        cells.push(Some(distribution.mean()));
        cells.extend(distribution.quantiles(spec));
        trace!(column = name, ?cells, "weighted column quantiles");
        result.push_column(name, cells)?;
    }

    Ok(result)
}

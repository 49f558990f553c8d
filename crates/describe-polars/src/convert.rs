//! Conversion between Polars frames and describe tables

use describe_core::{Column as TableColumn, ColumnValues, QuantileResult, Table};
use polars::prelude::*;

use crate::Result;

/// Name of the row-label column in summary frames
pub const LABEL_COLUMN: &str = "percentile";

fn is_numeric(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float32
            | DataType::Float64
    )
}

fn convert_column(column: &Column) -> Result<ColumnValues> {
    let values = match column.dtype() {
        dtype if is_numeric(dtype) => {
            let floats = column.cast(&DataType::Float64)?;
            ColumnValues::Numeric(floats.f64()?.into_iter().collect())
        }
        DataType::Boolean => ColumnValues::Boolean(column.bool()?.into_iter().collect()),
        DataType::String => ColumnValues::Text(
            column
                .str()?
                .into_iter()
                .map(|v| v.map(str::to_string))
                .collect(),
        ),
        // Dates, categoricals and nested values are carried as text
        _ => {
            let mut text = Vec::with_capacity(column.len());
            for i in 0..column.len() {
                text.push(match column.get(i)? {
                    AnyValue::Null => None,
                    value => Some(value.to_string()),
                });
            }
            ColumnValues::Text(text)
        }
    };
    Ok(values)
}

fn table_column(column: &Column) -> Result<TableColumn> {
    let values = match convert_column(column)? {
        ColumnValues::Numeric(v) => return Ok(TableColumn::nullable(column.name().as_str(), v)),
        other => other,
    };
    Ok(TableColumn::new(column.name().as_str(), values))
}

/// Convert every column of a frame.
///
/// Integer and float columns become numeric (`NaN` counts as missing),
/// booleans stay boolean and everything else is carried as text.
pub fn table_from_frame(df: &DataFrame) -> Result<Table> {
    let mut table = Table::new();
    for column in df.get_columns() {
        table.push_column(table_column(column)?)?;
    }
    Ok(table)
}

/// Convert only the named columns, in order; repeated names are taken once
pub fn table_from_frame_columns(df: &DataFrame, names: &[&str]) -> Result<Table> {
    let mut table = Table::new();
    for &name in names {
        if table.column(name).is_ok() {
            continue;
        }
        let column = df
            .column(name)
            .map_err(|_| describe_core::Error::ColumnNotFound(name.to_string()))?;
        table.push_column(table_column(column)?)?;
    }
    Ok(table)
}

/// Summary frame: a `percentile` label column, then one `Float64` column
/// per analysed column with nulls for undefined estimates
pub fn frame_from_result(result: &QuantileResult) -> Result<DataFrame> {
    let labels: Vec<String> = result.row_labels().iter().map(ToString::to_string).collect();

    let mut columns: Vec<Column> = Vec::with_capacity(result.n_cols() + 1);
    columns.push(Series::new(PlSmallStr::from(LABEL_COLUMN), labels).into());
    for column in result.iter_columns() {
        let series = Series::new(PlSmallStr::from(column.name.as_str()), column.values.clone());
        columns.push(series.into());
    }

    Ok(DataFrame::new(columns)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use describe_core::RowLabel;

    #[test]
    fn test_numeric_dtypes_become_numeric() {
        let df = df![
            "f" => [1.5f64, f64::NAN],
            "i" => [1i32, 2],
            "u" => [Some(7u8), None],
        ]
        .unwrap();

        let table = table_from_frame(&df).unwrap();
        assert_eq!(table.numeric_column("f").unwrap(), &[Some(1.5), None]);
        assert_eq!(table.numeric_column("i").unwrap(), &[Some(1.0), Some(2.0)]);
        assert_eq!(table.numeric_column("u").unwrap(), &[Some(7.0), None]);
    }

    #[test]
    fn test_non_numeric_dtypes() {
        let df = df![
            "s" => ["a", "b"],
            "b" => [true, false],
        ]
        .unwrap();

        let table = table_from_frame(&df).unwrap();
        assert_eq!(table.numeric_columns().count(), 0);
        assert_eq!(
            table.column("s").unwrap().values(),
            &ColumnValues::Text(vec![Some("a".into()), Some("b".into())])
        );
        assert_eq!(
            table.column("b").unwrap().values(),
            &ColumnValues::Boolean(vec![Some(true), Some(false)])
        );
    }

    #[test]
    fn test_selected_columns() {
        let df = df![
            "a" => [1.0, 2.0],
            "b" => [3.0, 4.0],
        ]
        .unwrap();

        let table = table_from_frame_columns(&df, &["b", "b", "a"]).unwrap();
        assert_eq!(table.column_names(), vec!["b", "a"]);

        let err = table_from_frame_columns(&df, &["zzz"]).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_frame_from_result() {
        let mut result = QuantileResult::new(vec![RowLabel::mean(), RowLabel::Fraction(0.5)]);
        result.push_column("v", vec![Some(2.5), None]).unwrap();

        let df = frame_from_result(&result).unwrap();
        assert_eq!(df.shape(), (2, 2));

        let labels = df.column(LABEL_COLUMN).unwrap().str().unwrap();
        assert_eq!(labels.get(0), Some("mean"));
        assert_eq!(labels.get(1), Some("0.5"));

        let values = df.column("v").unwrap().f64().unwrap();
        assert_eq!(values.get(0), Some(2.5));
        assert_eq!(values.get(1), None);
    }
}

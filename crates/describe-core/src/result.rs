//! Quantile summary tables

use std::fmt;

use serde::Serialize;

use crate::utils::format_fraction;
use crate::{Error, Result};

/// Label of a summary row
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RowLabel {
    /// Textual label such as `"0.25"` or `"mean"`
    Text(String),
    /// Raw percentile fraction
    Fraction(f64),
}

impl RowLabel {
    /// Label of the weighted-mean row
    pub fn mean() -> Self {
        RowLabel::Text("mean".to_string())
    }
}

impl fmt::Display for RowLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowLabel::Text(s) => f.write_str(s),
            RowLabel::Fraction(p) => f.write_str(&format_fraction(*p)),
        }
    }
}

/// One analysed column of a summary
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultColumn {
    pub name: String,
    /// One cell per row label; `None` means the estimate is undefined
    pub values: Vec<Option<f64>>,
}

/// Rows indexed by percentile label, one column per analysed value column
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuantileResult {
    row_labels: Vec<RowLabel>,
    columns: Vec<ResultColumn>,
}

impl QuantileResult {
    /// Create an empty summary with the given row labels
    pub fn new(row_labels: Vec<RowLabel>) -> Self {
        Self {
            row_labels,
            columns: Vec::new(),
        }
    }

    /// Append a column. It must have one cell per row label.
    pub fn push_column(&mut self, name: impl Into<String>, values: Vec<Option<f64>>) -> Result<()> {
        let name = name.into();
        if values.len() != self.row_labels.len() {
            return Err(Error::LengthMismatch {
                column: name,
                expected: self.row_labels.len(),
                actual: values.len(),
            });
        }
        if self.columns.iter().any(|c| c.name == name) {
            return Err(Error::DuplicateColumn(name));
        }
        self.columns.push(ResultColumn { name, values });
        Ok(())
    }

    pub fn row_labels(&self) -> &[RowLabel] {
        &self.row_labels
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Cells of a column, by name
    pub fn column(&self, name: &str) -> Option<&[Option<f64>]> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.values.as_slice())
    }

    pub fn iter_columns(&self) -> impl Iterator<Item = &ResultColumn> + '_ {
        self.columns.iter()
    }

    /// Position of the first row whose label prints as `label`
    pub fn row_index(&self, label: &str) -> Option<usize> {
        self.row_labels.iter().position(|l| l.to_string() == label)
    }

    /// Cell at (`row` label, `column`).
    ///
    /// Returns `None` both for an unknown row/column and for an undefined
    /// estimate; use [`QuantileResult::column`] to tell them apart.
    pub fn get(&self, row: &str, column: &str) -> Option<f64> {
        let index = self.row_index(row)?;
        self.column(column)?.get(index).copied().flatten()
    }

    /// `(rows, columns)`
    pub fn shape(&self) -> (usize, usize) {
        (self.n_rows(), self.n_cols())
    }

    pub fn n_rows(&self) -> usize {
        self.row_labels.len()
    }

    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }
}

fn format_cell(cell: Option<f64>) -> String {
    cell.map_or_else(|| "NaN".to_string(), format_fraction)
}

impl fmt::Display for QuantileResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels: Vec<String> = self.row_labels.iter().map(ToString::to_string).collect();
        let label_width = labels.iter().map(String::len).max().unwrap_or(0);

        let cells: Vec<Vec<String>> = self
            .columns
            .iter()
            .map(|c| c.values.iter().copied().map(format_cell).collect())
            .collect();
        let widths: Vec<usize> = self
            .columns
            .iter()
            .zip(&cells)
            .map(|(c, cells)| cells.iter().map(String::len).chain([c.name.len()]).max().unwrap_or(0))
            .collect();

        write!(f, "{:label_width$}", "")?;
        for (column, width) in self.columns.iter().zip(&widths) {
            write!(f, "  {:>width$}", column.name)?;
        }
        for (row, label) in labels.iter().enumerate() {
            writeln!(f)?;
            write!(f, "{label:<label_width$}")?;
            for (column_cells, width) in cells.iter().zip(&widths) {
                write!(f, "  {:>width$}", column_cells[row])?;
            }
        }
        Ok(())
    }
}

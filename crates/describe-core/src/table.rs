//! In-memory table of named columns
//!
//! A [`Table`] is the input contract of every estimator: an ordered set of
//! uniquely named, equally long columns. Only numeric columns take part in
//! quantile computations; boolean and text columns can be carried along and
//! are skipped where the caller asks for "every numeric column".

use crate::{Error, Result};

/// Values stored in a column
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnValues {
    /// Numbers, `None` marks a missing value
    Numeric(Vec<Option<f64>>),
    /// Booleans (not numeric)
    Boolean(Vec<Option<bool>>),
    /// Free text (not numeric)
    Text(Vec<Option<String>>),
}

impl ColumnValues {
    /// Number of rows
    pub fn len(&self) -> usize {
        match self {
            ColumnValues::Numeric(v) => v.len(),
            ColumnValues::Boolean(v) => v.len(),
            ColumnValues::Text(v) => v.len(),
        }
    }

    /// Whether the column holds no rows
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether this column takes part in numeric summaries
    pub fn is_numeric(&self) -> bool {
        matches!(self, ColumnValues::Numeric(_))
    }

    /// Borrow numeric values, if any
    pub fn as_numeric(&self) -> Option<&[Option<f64>]> {
        match self {
            ColumnValues::Numeric(v) => Some(v),
            _ => None,
        }
    }
}

/// A named column
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    name: String,
    values: ColumnValues,
}

impl Column {
    /// Create a column from a name and its values
    pub fn new(name: impl Into<String>, values: ColumnValues) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// Numeric column from raw floats; `NaN` becomes a missing value
    pub fn numeric<I>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let values = values
            .into_iter()
            .map(|v| if v.is_nan() { None } else { Some(v) })
            .collect();
        Self::new(name, ColumnValues::Numeric(values))
    }

    /// Numeric column with explicit missing values
    pub fn nullable<I>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = Option<f64>>,
    {
        let values = values
            .into_iter()
            .map(|v| v.filter(|x| !x.is_nan()))
            .collect();
        Self::new(name, ColumnValues::Numeric(values))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &ColumnValues {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn is_numeric(&self) -> bool {
        self.values.is_numeric()
    }
}

/// Ordered collection of named columns of equal length
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<Column>,
}

impl Table {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from columns, checking names and lengths
    pub fn from_columns<I>(columns: I) -> Result<Self>
    where
        I: IntoIterator<Item = Column>,
    {
        let mut table = Self::new();
        for column in columns {
            table.push_column(column)?;
        }
        Ok(table)
    }

    /// Append a column
    ///
    /// Fails if the name is taken or the length differs from the existing
    /// columns.
    pub fn push_column(&mut self, column: Column) -> Result<()> {
        if self.columns.iter().any(|c| c.name == column.name) {
            return Err(Error::DuplicateColumn(column.name));
        }
        if let Some(first) = self.columns.first() {
            if first.len() != column.len() {
                return Err(Error::LengthMismatch {
                    expected: first.len(),
                    actual: column.len(),
                    column: column.name,
                });
            }
        }
        self.columns.push(column);
        Ok(())
    }

    /// Add a numeric column from raw floats (`NaN` is missing)
    pub fn with_numeric<I>(mut self, name: impl Into<String>, values: I) -> Result<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        self.push_column(Column::numeric(name, values))?;
        Ok(self)
    }

    /// Add a numeric column with explicit missing values
    pub fn with_nullable<I>(mut self, name: impl Into<String>, values: I) -> Result<Self>
    where
        I: IntoIterator<Item = Option<f64>>,
    {
        self.push_column(Column::nullable(name, values))?;
        Ok(self)
    }

    /// Add a boolean column
    pub fn with_boolean<I>(mut self, name: impl Into<String>, values: I) -> Result<Self>
    where
        I: IntoIterator<Item = Option<bool>>,
    {
        let values = ColumnValues::Boolean(values.into_iter().collect());
        self.push_column(Column::new(name, values))?;
        Ok(self)
    }

    /// Add a text column
    pub fn with_text<I, S>(mut self, name: impl Into<String>, values: I) -> Result<Self>
    where
        I: IntoIterator<Item = Option<S>>,
        S: Into<String>,
    {
        let values = ColumnValues::Text(values.into_iter().map(|v| v.map(Into::into)).collect());
        self.push_column(Column::new(name, values))?;
        Ok(self)
    }

    /// Look up a column by name
    pub fn column(&self, name: &str) -> Result<&Column> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| Error::ColumnNotFound(name.to_string()))
    }

    /// Look up a numeric column by name
    pub fn numeric_column(&self, name: &str) -> Result<&[Option<f64>]> {
        self.column(name)?
            .values
            .as_numeric()
            .ok_or_else(|| Error::NonNumericColumn(name.to_string()))
    }

    /// Numeric columns in table order
    pub fn numeric_columns(&self) -> impl Iterator<Item = (&str, &[Option<f64>])> + '_ {
        self.columns
            .iter()
            .filter_map(|c| c.values.as_numeric().map(|v| (c.name.as_str(), v)))
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.columns.first().map_or(0, Column::len)
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

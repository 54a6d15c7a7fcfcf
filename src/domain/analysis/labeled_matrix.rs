//! Labeled Matrix - Dense numeric table with ordered row and column labels.

use serde::Serialize;
use std::collections::HashSet;

use crate::domain::foundation::AnalysisError;

/// A rectangular table of `f64` cells addressed by index or by label.
///
/// Values are stored row-major. Labels are unique per axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabeledMatrix {
    row_labels: Vec<String>,
    column_labels: Vec<String>,
    values: Vec<f64>,
}

impl LabeledMatrix {
    /// Creates a matrix from labels and row vectors.
    ///
    /// # Errors
    /// - `Shape` when a row length or the row count disagrees with the labels,
    ///   or when a label is repeated
    /// - `DataType` when a cell is NaN or infinite
    pub fn from_rows<R, C>(
        row_labels: Vec<R>,
        column_labels: Vec<C>,
        rows: Vec<Vec<f64>>,
    ) -> Result<Self, AnalysisError>
    where
        R: Into<String>,
        C: Into<String>,
    {
        let row_labels: Vec<String> = row_labels.into_iter().map(Into::into).collect();
        let column_labels: Vec<String> = column_labels.into_iter().map(Into::into).collect();

        Self::ensure_unique("row", &row_labels)?;
        Self::ensure_unique("column", &column_labels)?;

        if rows.len() != row_labels.len() {
            return Err(AnalysisError::shape(format!(
                "{} row labels but {} rows",
                row_labels.len(),
                rows.len()
            )));
        }

        let mut values = Vec::with_capacity(row_labels.len() * column_labels.len());
        for (row_label, row) in row_labels.iter().zip(rows) {
            if row.len() != column_labels.len() {
                return Err(AnalysisError::shape(format!(
                    "row '{}' has {} cells, expected {}",
                    row_label,
                    row.len(),
                    column_labels.len()
                )));
            }
            for (column_label, value) in column_labels.iter().zip(&row) {
                if !value.is_finite() {
                    return Err(AnalysisError::data_type(
                        row_label.as_str(),
                        column_label.as_str(),
                        value.to_string(),
                    ));
                }
            }
            values.extend(row);
        }

        Ok(Self {
            row_labels,
            column_labels,
            values,
        })
    }

    /// Creates a builder for constructing a matrix row by row.
    pub fn builder() -> LabeledMatrixBuilder {
        LabeledMatrixBuilder::new()
    }

    fn ensure_unique(axis: &str, labels: &[String]) -> Result<(), AnalysisError> {
        let mut seen = HashSet::with_capacity(labels.len());
        for label in labels {
            if !seen.insert(label.as_str()) {
                return Err(AnalysisError::shape(format!(
                    "duplicate {} label '{}'",
                    axis, label
                )));
            }
        }
        Ok(())
    }

    pub fn row_labels(&self) -> &[String] {
        &self.row_labels
    }

    pub fn column_labels(&self) -> &[String] {
        &self.column_labels
    }

    /// Returns the number of rows.
    pub fn row_count(&self) -> usize {
        self.row_labels.len()
    }

    /// Returns the number of columns.
    pub fn column_count(&self) -> usize {
        self.column_labels.len()
    }

    /// Returns true if the matrix has as many rows as columns.
    pub fn is_square(&self) -> bool {
        self.row_count() == self.column_count()
    }

    /// Returns true if the matrix has no cells.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Looks up a row by label.
    pub fn row_index(&self, label: &str) -> Option<usize> {
        self.row_labels.iter().position(|l| l == label)
    }

    /// Looks up a column by label.
    pub fn column_index(&self, label: &str) -> Option<usize> {
        self.column_labels.iter().position(|l| l == label)
    }

    /// Returns the cell at (row, column). Indices must be in range.
    pub(crate) fn get(&self, row: usize, column: usize) -> f64 {
        self.values[row * self.column_count() + column]
    }

    /// Returns the cell addressed by labels.
    pub fn value(&self, row_label: &str, column_label: &str) -> Option<f64> {
        let row = self.row_index(row_label)?;
        let column = self.column_index(column_label)?;
        Some(self.get(row, column))
    }

    /// Returns a row as a slice.
    pub(crate) fn row(&self, row: usize) -> &[f64] {
        let width = self.column_count();
        &self.values[row * width..(row + 1) * width]
    }

    /// Iterates over the cells of a column, top to bottom.
    pub(crate) fn column(&self, column: usize) -> impl Iterator<Item = f64> + '_ {
        (0..self.row_count()).map(move |row| self.get(row, column))
    }

    /// Sums a column.
    pub(crate) fn column_sum(&self, column: usize) -> f64 {
        self.column(column).sum()
    }

    /// Iterates over all cells with their row and column indices.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        let width = self.column_count();
        self.values
            .iter()
            .enumerate()
            .map(move |(i, &v)| (i / width, i % width, v))
    }

    /// Builds a new matrix with the same labels and cells produced by `f`.
    pub(crate) fn map_cells(&self, mut f: impl FnMut(usize, usize, f64) -> f64) -> Self {
        let values = self.cells().map(|(r, c, v)| f(r, c, v)).collect();
        Self {
            row_labels: self.row_labels.clone(),
            column_labels: self.column_labels.clone(),
            values,
        }
    }
}

/// Builder for constructing LabeledMatrix instances.
#[derive(Debug, Default)]
pub struct LabeledMatrixBuilder {
    row_labels: Vec<String>,
    column_labels: Vec<String>,
    rows: Vec<Vec<f64>>,
}

impl LabeledMatrixBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the column labels.
    pub fn columns(mut self, labels: Vec<impl Into<String>>) -> Self {
        self.column_labels = labels.into_iter().map(|s| s.into()).collect();
        self
    }

    /// Appends a labeled row.
    pub fn row(mut self, label: impl Into<String>, values: Vec<f64>) -> Self {
        self.row_labels.push(label.into());
        self.rows.push(values);
        self
    }

    /// Builds the matrix, validating its shape.
    pub fn build(self) -> Result<LabeledMatrix, AnalysisError> {
        LabeledMatrix::from_rows(self.row_labels, self.column_labels, self.rows)
    }
}

//! Decision Matrix - Alternatives (rows) scored on criteria (columns).

use serde::Serialize;

use super::LabeledMatrix;
use crate::domain::foundation::AnalysisError;

/// A validated m×n decision matrix with non-negative cells.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DecisionMatrix(LabeledMatrix);

impl DecisionMatrix {
    /// Validates a labeled matrix as a decision matrix.
    ///
    /// # Errors
    /// - `Shape` when there are no alternatives or no criteria
    /// - `InvalidValue` when a cell is negative
    pub fn new(matrix: LabeledMatrix) -> Result<Self, AnalysisError> {
        if matrix.row_count() == 0 || matrix.column_count() == 0 {
            return Err(AnalysisError::shape(
                "decision matrix needs at least one alternative and one criterion",
            ));
        }

        if let Some((r, c, value)) = matrix.cells().find(|&(_, _, v)| v < 0.0) {
            return Err(AnalysisError::invalid_value(
                matrix.column_labels()[c].as_str(),
                format!(
                    "alternative '{}' has negative value {}",
                    matrix.row_labels()[r],
                    value
                ),
            ));
        }

        Ok(Self(matrix))
    }

    /// Builds a decision matrix from labels and rows.
    pub fn from_rows<R, C>(
        alternatives: Vec<R>,
        criteria: Vec<C>,
        rows: Vec<Vec<f64>>,
    ) -> Result<Self, AnalysisError>
    where
        R: Into<String>,
        C: Into<String>,
    {
        Self::new(LabeledMatrix::from_rows(alternatives, criteria, rows)?)
    }

    pub fn alternatives(&self) -> &[String] {
        self.0.row_labels()
    }

    pub fn criteria(&self) -> &[String] {
        self.0.column_labels()
    }

    /// Returns the underlying labeled matrix.
    pub fn as_matrix(&self) -> &LabeledMatrix {
        &self.0
    }

    /// Fails unless the criteria match `expected` in count and order.
    pub fn ensure_criteria(&self, expected: &[String]) -> Result<(), AnalysisError> {
        if self.criteria() != expected {
            return Err(AnalysisError::shape(format!(
                "decision matrix criteria [{}] do not match [{}]",
                self.criteria().join(", "),
                expected.join(", ")
            )));
        }
        Ok(())
    }
}

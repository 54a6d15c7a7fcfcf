//! Judgment Matrix - Square pairwise comparison table over criteria.

use serde::Serialize;

use super::random_index::{MAX_CRITERIA, SAATY_SCALE_MAX, SAATY_SCALE_MIN};
use super::LabeledMatrix;
use crate::domain::foundation::AnalysisError;

const DIAGONAL_TOLERANCE: f64 = 1e-9;

/// A pair of cells that are not reciprocal of each other.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReciprocityViolation {
    pub row: String,
    pub column: String,
    pub value: f64,
    pub transposed: f64,
}

/// A validated n×n judgment matrix.
///
/// Guarantees: non-empty, square, identical row and column labels, strictly
/// positive cells and a unit diagonal. Reciprocity is only reported, see
/// [`JudgmentMatrix::reciprocity_violations`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct JudgmentMatrix(LabeledMatrix);

impl JudgmentMatrix {
    /// Validates a labeled matrix as a judgment matrix.
    pub fn new(matrix: LabeledMatrix) -> Result<Self, AnalysisError> {
        if matrix.is_empty() {
            return Err(AnalysisError::shape("judgment matrix is empty"));
        }
        if !matrix.is_square() {
            return Err(AnalysisError::shape(format!(
                "judgment matrix must be square, got {}x{}",
                matrix.row_count(),
                matrix.column_count()
            )));
        }
        if matrix.row_labels() != matrix.column_labels() {
            return Err(AnalysisError::shape(
                "judgment matrix rows and columns must list the same criteria in the same order",
            ));
        }

        for (r, c, value) in matrix.cells() {
            let row = &matrix.row_labels()[r];
            let column = &matrix.column_labels()[c];
            if value <= 0.0 {
                return Err(AnalysisError::invalid_judgment(
                    row.as_str(),
                    column.as_str(),
                    format!("judgments must be positive, got {}", value),
                ));
            }
            if r == c && (value - 1.0).abs() > DIAGONAL_TOLERANCE {
                return Err(AnalysisError::invalid_judgment(
                    row.as_str(),
                    column.as_str(),
                    format!("diagonal must be 1, got {}", value),
                ));
            }
        }

        Ok(Self(matrix))
    }

    /// Builds a judgment matrix from criteria and rows.
    pub fn from_rows<S>(criteria: Vec<S>, rows: Vec<Vec<f64>>) -> Result<Self, AnalysisError>
    where
        S: Into<String> + Clone,
    {
        Self::new(LabeledMatrix::from_rows(criteria.clone(), criteria, rows)?)
    }

    /// Builds a judgment matrix from its upper triangle.
    ///
    /// `upper[i]` holds the judgments of criterion `i` against criteria
    /// `i + 1..n`. The diagonal is set to 1 and the lower triangle to the
    /// reciprocals, so the result is perfectly reciprocal.
    pub fn from_upper_triangle<S>(
        criteria: Vec<S>,
        upper: Vec<Vec<f64>>,
    ) -> Result<Self, AnalysisError>
    where
        S: Into<String> + Clone,
    {
        let n = criteria.len();
        if upper.len() + 1 != n && !(n == 0 && upper.is_empty()) {
            return Err(AnalysisError::shape(format!(
                "expected {} upper triangle rows for {} criteria, got {}",
                n.saturating_sub(1),
                n,
                upper.len()
            )));
        }

        let mut rows = vec![vec![1.0; n]; n];
        for (i, judgments) in upper.iter().enumerate() {
            if judgments.len() != n - i - 1 {
                return Err(AnalysisError::shape(format!(
                    "upper triangle row {} has {} judgments, expected {}",
                    i,
                    judgments.len(),
                    n - i - 1
                )));
            }
            for (offset, &value) in judgments.iter().enumerate() {
                let j = i + 1 + offset;
                rows[i][j] = value;
                rows[j][i] = 1.0 / value;
            }
        }

        Self::from_rows(criteria, rows)
    }

    /// Returns the criteria in matrix order.
    pub fn criteria(&self) -> &[String] {
        self.0.column_labels()
    }

    /// Returns the number of criteria.
    pub fn size(&self) -> usize {
        self.0.column_count()
    }

    /// Returns the underlying labeled matrix.
    pub fn as_matrix(&self) -> &LabeledMatrix {
        &self.0
    }

    pub(crate) fn get(&self, row: usize, column: usize) -> f64 {
        self.0.get(row, column)
    }

    /// Fails when the matrix exceeds the random index table.
    pub fn ensure_within_random_index(&self) -> Result<(), AnalysisError> {
        if self.size() > MAX_CRITERIA {
            return Err(AnalysisError::TooManyCriteria {
                max: MAX_CRITERIA,
                actual: self.size(),
            });
        }
        Ok(())
    }

    /// Fails on the first judgment outside the Saaty scale [1/9, 9].
    pub fn ensure_saaty_scale(&self) -> Result<(), AnalysisError> {
        // Small slack so 1/9 computed in floating point still passes.
        let lower = SAATY_SCALE_MIN - 1e-12;
        let upper = SAATY_SCALE_MAX + 1e-12;
        for (r, c, value) in self.0.cells() {
            if value < lower || value > upper {
                return Err(AnalysisError::OutOfSaatyScale {
                    row: self.criteria()[r].clone(),
                    column: self.criteria()[c].clone(),
                    value,
                });
            }
        }
        Ok(())
    }

    /// Lists the upper-triangle pairs where `a(i,j) * a(j,i)` differs from 1
    /// by more than `tolerance`.
    pub fn reciprocity_violations(&self, tolerance: f64) -> Vec<ReciprocityViolation> {
        let n = self.size();
        let mut violations = Vec::new();
        for i in 0..n {
            for j in (i + 1)..n {
                let value = self.get(i, j);
                let transposed = self.get(j, i);
                if (value * transposed - 1.0).abs() > tolerance {
                    violations.push(ReciprocityViolation {
                        row: self.criteria()[i].clone(),
                        column: self.criteria()[j].clone(),
                        value,
                        transposed,
                    });
                }
            }
        }
        violations
    }
}

//! TableInput - Loosely typed labeled table as received from callers.
//!
//! Cells may be JSON/YAML numbers or strings holding a decimal or a Saaty
//! fraction such as `"1/3"`. Anything else is reported as a data type error
//! when the table is converted into a [`LabeledMatrix`].

use serde::{Deserialize, Serialize};

use crate::domain::analysis::LabeledMatrix;
use crate::domain::foundation::AnalysisError;

/// A single raw cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawCell {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

impl RawCell {
    /// Parses the cell into a number.
    pub fn to_f64(&self, row: &str, column: &str) -> Result<f64, AnalysisError> {
        match self {
            RawCell::Number(value) => Ok(*value),
            RawCell::Text(text) => {
                parse_judgment(text).ok_or_else(|| AnalysisError::data_type(row, column, text.as_str()))
            }
            RawCell::Other(value) => Err(AnalysisError::data_type(row, column, value.to_string())),
        }
    }
}

impl From<f64> for RawCell {
    fn from(value: f64) -> Self {
        RawCell::Number(value)
    }
}

impl From<&str> for RawCell {
    fn from(value: &str) -> Self {
        RawCell::Text(value.to_string())
    }
}

/// Parses `"0.25"`, `"3"` or `"1/3"`.
fn parse_judgment(text: &str) -> Option<f64> {
    let text = text.trim();
    let value = match text.split_once('/') {
        Some((numerator, denominator)) => {
            let numerator: f64 = numerator.trim().parse().ok()?;
            let denominator: f64 = denominator.trim().parse().ok()?;
            if denominator == 0.0 {
                return None;
            }
            numerator / denominator
        }
        None => text.parse().ok()?,
    };
    value.is_finite().then_some(value)
}

/// A labeled row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowInput {
    pub label: String,
    pub values: Vec<RawCell>,
}

/// A labeled table: column labels plus labeled rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableInput {
    pub columns: Vec<String>,
    pub rows: Vec<RowInput>,
}

impl TableInput {
    /// Converts into a validated numeric matrix.
    ///
    /// # Errors
    /// - `DataType` for the first non-numeric cell
    /// - `Shape` for ragged rows or duplicate labels
    pub fn to_matrix(&self) -> Result<LabeledMatrix, AnalysisError> {
        let mut rows = Vec::with_capacity(self.rows.len());
        for row in &self.rows {
            let values = row
                .values
                .iter()
                .enumerate()
                .map(|(i, cell)| {
                    let column = self.columns.get(i).map(String::as_str).unwrap_or("?");
                    cell.to_f64(&row.label, column)
                })
                .collect::<Result<Vec<f64>, _>>()?;
            rows.push(values);
        }

        let row_labels: Vec<String> = self.rows.iter().map(|r| r.label.clone()).collect();
        LabeledMatrix::from_rows(row_labels, self.columns.clone(), rows)
    }
}

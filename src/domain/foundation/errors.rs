//! Error types for the domain layer.

use std::fmt;
use thiserror::Error;

/// Errors raised while validating inputs or deriving priorities.
///
/// Every analysis either succeeds completely or fails here, before any
/// weight is computed. An inconsistent judgment matrix is not an error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    #[error("Shape mismatch: {reason}")]
    Shape { reason: String },

    #[error("Cell ({row}, {column}) is not numeric: '{value}'")]
    DataType {
        row: String,
        column: String,
        value: String,
    },

    #[error("'{criterion}' is not a criterion of the matrix")]
    UnknownCriterion { criterion: String },

    #[error("Judgment matrix has {actual} criteria, at most {max} are supported")]
    TooManyCriteria { max: usize, actual: usize },

    #[error("Invalid judgment at ({row}, {column}): {reason}")]
    InvalidJudgment {
        row: String,
        column: String,
        reason: String,
    },

    #[error("Judgment {value} at ({row}, {column}) is outside the Saaty scale [1/9, 9]")]
    OutOfSaatyScale {
        row: String,
        column: String,
        value: f64,
    },

    #[error("Invalid value for criterion '{criterion}': {reason}")]
    InvalidValue { criterion: String, reason: String },
}

impl AnalysisError {
    /// Creates a shape error.
    pub fn shape(reason: impl Into<String>) -> Self {
        AnalysisError::Shape {
            reason: reason.into(),
        }
    }

    /// Creates a data type error for a non-numeric cell.
    pub fn data_type(
        row: impl Into<String>,
        column: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        AnalysisError::DataType {
            row: row.into(),
            column: column.into(),
            value: value.into(),
        }
    }

    /// Creates an unknown criterion error.
    pub fn unknown_criterion(criterion: impl Into<String>) -> Self {
        AnalysisError::UnknownCriterion {
            criterion: criterion.into(),
        }
    }

    /// Creates an invalid judgment error.
    pub fn invalid_judgment(
        row: impl Into<String>,
        column: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        AnalysisError::InvalidJudgment {
            row: row.into(),
            column: column.into(),
            reason: reason.into(),
        }
    }

    /// Creates an invalid value error.
    pub fn invalid_value(criterion: impl Into<String>, reason: impl Into<String>) -> Self {
        AnalysisError::InvalidValue {
            criterion: criterion.into(),
            reason: reason.into(),
        }
    }

    /// Returns the stable error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            AnalysisError::Shape { .. } => ErrorCode::ShapeError,
            AnalysisError::DataType { .. } => ErrorCode::DataTypeError,
            AnalysisError::UnknownCriterion { .. } => ErrorCode::UnknownCriterion,
            AnalysisError::TooManyCriteria { .. } => ErrorCode::TooManyCriteria,
            AnalysisError::InvalidJudgment { .. } => ErrorCode::InvalidJudgment,
            AnalysisError::OutOfSaatyScale { .. } => ErrorCode::OutOfSaatyScale,
            AnalysisError::InvalidValue { .. } => ErrorCode::InvalidValue,
        }
    }
}

/// Error codes exposed to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    ShapeError,
    DataTypeError,
    UnknownCriterion,
    TooManyCriteria,
    InvalidJudgment,
    OutOfSaatyScale,
    InvalidValue,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ShapeError => "SHAPE_ERROR",
            ErrorCode::DataTypeError => "DATA_TYPE_ERROR",
            ErrorCode::UnknownCriterion => "UNKNOWN_CRITERION",
            ErrorCode::TooManyCriteria => "TOO_MANY_CRITERIA",
            ErrorCode::InvalidJudgment => "INVALID_JUDGMENT",
            ErrorCode::OutOfSaatyScale => "OUT_OF_SAATY_SCALE",
            ErrorCode::InvalidValue => "INVALID_VALUE",
        };
        write!(f, "{}", s)
    }
}

//! HTTP DTOs for analysis endpoints.
//!
//! Requests decouple the wire shape from application commands. Reports are
//! already serializable and are returned as-is.

use serde::{Deserialize, Serialize};

use crate::application::handlers::{
    RunGaussianAnalysisCommand, RunSaatyAnalysisCommand, TableInput,
};
use crate::domain::foundation::AnalysisError;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to run the Saaty method.
#[derive(Debug, Clone, Deserialize)]
pub struct SaatyAnalysisRequest {
    pub judgments: TableInput,
    #[serde(default)]
    pub decision: Option<TableInput>,
    #[serde(default)]
    pub minimize: Vec<String>,
}

impl From<SaatyAnalysisRequest> for RunSaatyAnalysisCommand {
    fn from(req: SaatyAnalysisRequest) -> Self {
        Self {
            judgments: req.judgments,
            decision: req.decision,
            minimize: req.minimize,
        }
    }
}

/// Request to run the Gaussian method.
#[derive(Debug, Clone, Deserialize)]
pub struct GaussianAnalysisRequest {
    pub decision: TableInput,
    #[serde(default)]
    pub minimize: Vec<String>,
}

impl From<GaussianAnalysisRequest> for RunGaussianAnalysisCommand {
    fn from(req: GaussianAnalysisRequest) -> Self {
        Self {
            decision: req.decision,
            minimize: req.minimize,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok",
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// Error response body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }
}

impl From<&AnalysisError> for ErrorResponse {
    fn from(error: &AnalysisError) -> Self {
        let details = match error {
            AnalysisError::DataType { row, column, value } => Some(serde_json::json!({
                "row": row,
                "column": column,
                "value": value,
            })),
            AnalysisError::InvalidJudgment { row, column, .. }
            | AnalysisError::OutOfSaatyScale { row, column, .. } => {
                Some(serde_json::json!({ "row": row, "column": column }))
            }
            AnalysisError::UnknownCriterion { criterion }
            | AnalysisError::InvalidValue { criterion, .. } => {
                Some(serde_json::json!({ "criterion": criterion }))
            }
            AnalysisError::Shape { .. } | AnalysisError::TooManyCriteria { .. } => None,
        };

        Self {
            code: error.code().to_string(),
            message: error.to_string(),
            details,
        }
    }
}

//! HTTP handlers for analysis endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::handlers::{
    AnalysisReport, RunGaussianAnalysisHandler, RunSaatyAnalysisHandler,
};
use crate::config::AnalysisConfig;
use crate::domain::foundation::AnalysisError;

use super::dto::{ErrorResponse, GaussianAnalysisRequest, HealthResponse, SaatyAnalysisRequest};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct AnalysisAppState {
    saaty_handler: Arc<RunSaatyAnalysisHandler>,
    gaussian_handler: Arc<RunGaussianAnalysisHandler>,
}

impl AnalysisAppState {
    pub fn new(config: AnalysisConfig) -> Self {
        Self {
            saaty_handler: Arc::new(RunSaatyAnalysisHandler::new(config)),
            gaussian_handler: Arc::new(RunGaussianAnalysisHandler::new()),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error mapping
// ════════════════════════════════════════════════════════════════════════════

/// Analysis failure surfaced over HTTP.
///
/// Malformed tables are `400 Bad Request`; well-formed tables whose values
/// break an analysis rule are `422 Unprocessable Entity`.
#[derive(Debug)]
pub struct AnalysisApiError(pub AnalysisError);

impl From<AnalysisError> for AnalysisApiError {
    fn from(error: AnalysisError) -> Self {
        Self(error)
    }
}

impl AnalysisApiError {
    pub fn status(&self) -> StatusCode {
        match self.0 {
            AnalysisError::Shape { .. } | AnalysisError::DataType { .. } => {
                StatusCode::BAD_REQUEST
            }
            AnalysisError::UnknownCriterion { .. }
            | AnalysisError::TooManyCriteria { .. }
            | AnalysisError::InvalidJudgment { .. }
            | AnalysisError::OutOfSaatyScale { .. }
            | AnalysisError::InvalidValue { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for AnalysisApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(ErrorResponse::from(&self.0))).into_response()
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/analysis/saaty - Weight criteria from pairwise judgments
pub async fn run_saaty(
    State(state): State<AnalysisAppState>,
    Json(req): Json<SaatyAnalysisRequest>,
) -> Result<Json<AnalysisReport>, AnalysisApiError> {
    let report = state.saaty_handler.handle(req.into())?;
    Ok(Json(report))
}

/// POST /api/analysis/gaussian - Weight criteria from value dispersion
pub async fn run_gaussian(
    State(state): State<AnalysisAppState>,
    Json(req): Json<GaussianAnalysisRequest>,
) -> Result<Json<AnalysisReport>, AnalysisApiError> {
    let report = state.gaussian_handler.handle(req.into())?;
    Ok(Json(report))
}

/// GET /health - Liveness probe
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(HealthResponse::ok()))
}

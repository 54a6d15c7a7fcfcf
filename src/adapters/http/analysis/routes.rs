//! HTTP routes for analysis endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{health, run_gaussian, run_saaty, AnalysisAppState};

/// Creates the analysis router, to be nested under `/api/analysis`.
pub fn analysis_routes(state: AnalysisAppState) -> Router {
    Router::new()
        .route("/saaty", post(run_saaty))
        .route("/gaussian", post(run_gaussian))
        .with_state(state)
}

/// Creates the liveness router.
pub fn health_routes() -> Router {
    Router::new().route("/health", get(health))
}

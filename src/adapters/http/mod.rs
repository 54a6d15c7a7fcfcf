//! HTTP adapters - REST API implementations.

pub mod analysis;

use axum::Router;

use crate::config::AnalysisConfig;

pub use analysis::{analysis_routes, health_routes, AnalysisApiError, AnalysisAppState};

/// Full API: analysis endpoints under `/api/analysis` plus `/health`.
pub fn api_router(config: AnalysisConfig) -> Router {
    Router::new()
        .nest("/api/analysis", analysis_routes(AnalysisAppState::new(config)))
        .merge(health_routes())
}

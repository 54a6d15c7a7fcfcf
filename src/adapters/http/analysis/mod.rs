//! HTTP adapter for analysis endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{ErrorResponse, GaussianAnalysisRequest, HealthResponse, SaatyAnalysisRequest};
pub use handlers::{AnalysisApiError, AnalysisAppState};
pub use routes::{analysis_routes, health_routes};

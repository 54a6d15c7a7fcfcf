//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `file` - Problem definitions read from JSON/YAML files
//! - `http` - REST API over the analysis handlers

pub mod file;
pub mod http;

pub use file::FileProblemSource;
pub use http::{api_router, AnalysisAppState};

//! Application layer - Commands and Handlers.
//!
//! This layer orchestrates domain operations: it validates loosely typed
//! input, runs the weighting engines and assembles reports.

pub mod handlers;

pub use handlers::{
    AnalysisReport, ProblemDefinition, RunAnalysisHandler, RunGaussianAnalysisCommand,
    RunGaussianAnalysisHandler, RunSaatyAnalysisCommand, RunSaatyAnalysisHandler, TableInput,
};

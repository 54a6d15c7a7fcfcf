//! Command handlers for the application layer.

pub mod analysis;

pub use analysis::{
    AnalysisReport, ConsistencyReport, GaussianFactor, ProblemDefinition, RawCell,
    RowInput, RunAnalysisHandler, RunGaussianAnalysisCommand, RunGaussianAnalysisHandler,
    RunSaatyAnalysisCommand, RunSaatyAnalysisHandler, TableInput,
};

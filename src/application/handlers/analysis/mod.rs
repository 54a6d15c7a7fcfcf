//! Analysis command handlers.
//!
//! Turn loosely typed tables into validated matrices, run a weighting
//! engine and return an [`AnalysisReport`].

mod report;
mod run_analysis;
mod run_gaussian_analysis;
mod run_saaty_analysis;
mod table_input;

pub use report::{AnalysisReport, ConsistencyReport, GaussianFactor};
pub use run_analysis::{ProblemDefinition, RunAnalysisHandler};
pub use run_gaussian_analysis::{RunGaussianAnalysisCommand, RunGaussianAnalysisHandler};
pub use run_saaty_analysis::{RunSaatyAnalysisCommand, RunSaatyAnalysisHandler};
pub use table_input::{RawCell, RowInput, TableInput};

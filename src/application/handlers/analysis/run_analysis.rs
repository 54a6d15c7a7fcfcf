//! RunAnalysisHandler - Dispatches a problem definition to its method.

use serde::{Deserialize, Serialize};

use super::{
    AnalysisReport, RunGaussianAnalysisCommand, RunGaussianAnalysisHandler,
    RunSaatyAnalysisCommand, RunSaatyAnalysisHandler,
};
use crate::config::AnalysisConfig;
use crate::domain::foundation::AnalysisError;

/// A complete decision problem, tagged by weighting method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "lowercase")]
pub enum ProblemDefinition {
    Saaty(RunSaatyAnalysisCommand),
    Gaussian(RunGaussianAnalysisCommand),
}

/// Runs whichever method a problem definition names.
pub struct RunAnalysisHandler {
    saaty: RunSaatyAnalysisHandler,
    gaussian: RunGaussianAnalysisHandler,
}

impl RunAnalysisHandler {
    pub fn new(config: AnalysisConfig) -> Self {
        Self {
            saaty: RunSaatyAnalysisHandler::new(config),
            gaussian: RunGaussianAnalysisHandler::new(),
        }
    }

    pub fn handle(&self, problem: ProblemDefinition) -> Result<AnalysisReport, AnalysisError> {
        match problem {
            ProblemDefinition::Saaty(cmd) => self.saaty.handle(cmd),
            ProblemDefinition::Gaussian(cmd) => self.gaussian.handle(cmd),
        }
    }
}

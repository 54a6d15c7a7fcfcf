//! RunGaussianAnalysisHandler - Command handler for dispersion-based weighting.

use serde::{Deserialize, Serialize};
use tracing::info;

use super::{AnalysisReport, TableInput};
use crate::domain::analysis::{DecisionMatrix, DispersionWeightEngine};
use crate::domain::foundation::AnalysisError;

/// Command to run the Gaussian method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunGaussianAnalysisCommand {
    /// Alternatives × criteria with cardinal values.
    pub decision: TableInput,
    /// Criteria where smaller values are better.
    #[serde(default)]
    pub minimize: Vec<String>,
}

/// Handler for running the Gaussian method.
#[derive(Debug, Default)]
pub struct RunGaussianAnalysisHandler;

impl RunGaussianAnalysisHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(
        &self,
        cmd: RunGaussianAnalysisCommand,
    ) -> Result<AnalysisReport, AnalysisError> {
        let decision = DecisionMatrix::new(cmd.decision.to_matrix()?)?;
        let engine = DispersionWeightEngine::with_minimized(decision, &cmd.minimize)?;

        let report = AnalysisReport::from_gaussian(&engine);
        info!(
            criteria = report.weights.len(),
            alternatives = engine.decision_matrix().alternatives().len(),
            "Gaussian analysis completed"
        );
        Ok(report)
    }
}

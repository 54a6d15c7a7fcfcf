//! AnalysisReport - Serializable outcome of a weighting run.

use serde::Serialize;

use crate::domain::analysis::{
    Consistency, DispersionWeightEngine, GlobalPreference, JudgmentConsistencyEngine,
    LocalPreferenceMatrix, Method, OptimizationMap, PriorityEngine, WeightVector,
};

/// Consistency figures plus the verdict against the configured threshold.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConsistencyReport {
    #[serde(flatten)]
    pub figures: Consistency,
    pub threshold: f64,
    pub is_consistent: bool,
}

/// Coefficient of variation of one criterion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GaussianFactor {
    pub criterion: String,
    pub factor: f64,
}

/// Everything a caller needs to display or audit an analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub method: Method,
    pub optimization: OptimizationMap,
    pub weights: WeightVector,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consistency: Option<ConsistencyReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gaussian_factors: Option<Vec<GaussianFactor>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_preference: Option<LocalPreferenceMatrix>,
    /// Best first. Absent when no decision matrix was supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ranking: Option<GlobalPreference>,
}

impl AnalysisReport {
    /// Report for a judgment engine, optionally with a ranked decision matrix.
    pub fn from_saaty(
        engine: &JudgmentConsistencyEngine,
        preferences: Option<(LocalPreferenceMatrix, GlobalPreference)>,
    ) -> Self {
        let (local_preference, ranking) = match preferences {
            Some((local, global)) => (Some(local), Some(global)),
            None => (None, None),
        };
        Self {
            method: engine.method(),
            optimization: engine.optimization_map().clone(),
            weights: engine.weights().clone(),
            consistency: Some(ConsistencyReport {
                figures: engine.consistency(),
                threshold: engine.consistency_threshold(),
                is_consistent: engine.is_consistent(),
            }),
            gaussian_factors: None,
            local_preference,
            ranking,
        }
    }

    /// Report for a dispersion engine.
    pub fn from_gaussian(engine: &DispersionWeightEngine) -> Self {
        Self {
            method: engine.method(),
            optimization: engine.optimization_map().clone(),
            weights: engine.weights().clone(),
            consistency: None,
            gaussian_factors: Some(
                engine
                    .gaussian_factors()
                    .map(|(criterion, factor)| GaussianFactor {
                        criterion: criterion.to_string(),
                        factor,
                    })
                    .collect(),
            ),
            local_preference: Some(engine.local_preference().clone()),
            ranking: Some(engine.global_preference()),
        }
    }
}

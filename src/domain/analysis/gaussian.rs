//! Dispersion Weight Engine - Gaussian AHP.
//!
//! Weights come from how much the alternatives differ on each criterion
//! rather than from pairwise judgments. Only meaningful for cardinal data.

use tracing::{debug, warn};

use super::{
    DecisionMatrix, GlobalPreference, LocalPreferenceMatrix, Method, OptimizationMap,
    PreferenceAggregator, PriorityEngine, WeightVector,
};
use crate::domain::foundation::AnalysisError;

const DISPERSION_EPSILON: f64 = 1e-12;

/// Derives weights from the coefficient of variation of each criterion.
///
/// # Algorithm
/// 1. Local preference: invert minimized columns, normalize columns to sum 1.
/// 2. Gaussian factor per criterion: sample standard deviation divided by
///    the mean of its local preference column.
/// 3. Weight = factor / Σ factors.
///
/// A criterion on which every alternative scores the same gets factor 0 and
/// therefore weight 0.
#[derive(Debug, Clone)]
pub struct DispersionWeightEngine {
    decision: DecisionMatrix,
    optimization: OptimizationMap,
    local_preference: LocalPreferenceMatrix,
    gaussian_factors: Vec<f64>,
    weights: WeightVector,
    global_preference: GlobalPreference,
}

impl DispersionWeightEngine {
    /// Creates an engine that maximizes every criterion.
    pub fn new(decision: DecisionMatrix) -> Result<Self, AnalysisError> {
        let optimization = OptimizationMap::maximize_all(decision.criteria());
        Self::with_optimization(decision, optimization)
    }

    /// Creates an engine that minimizes the listed criteria.
    pub fn with_minimized<S: AsRef<str>>(
        decision: DecisionMatrix,
        minimized: &[S],
    ) -> Result<Self, AnalysisError> {
        let optimization = OptimizationMap::with_minimized(decision.criteria(), minimized)?;
        Self::with_optimization(decision, optimization)
    }

    /// Creates an engine with explicit directives.
    pub fn with_optimization(
        decision: DecisionMatrix,
        optimization: OptimizationMap,
    ) -> Result<Self, AnalysisError> {
        let local_preference = PreferenceAggregator::local_preference(&decision, &optimization)?;
        let gaussian_factors = Self::coefficients_of_variation(&local_preference);

        if gaussian_factors.iter().all(|f| *f == 0.0) {
            warn!(
                alternatives = decision.alternatives().len(),
                "No criterion discriminates between alternatives, using uniform weights"
            );
        }

        let weights =
            WeightVector::normalized(decision.criteria().to_vec(), gaussian_factors.clone());
        let global_preference = PreferenceAggregator::global_preference(&local_preference, &weights)?;

        debug!(
            criteria = decision.criteria().len(),
            alternatives = decision.alternatives().len(),
            "Derived gaussian weights from dispersion"
        );

        Ok(Self {
            decision,
            optimization,
            local_preference,
            gaussian_factors,
            weights,
            global_preference,
        })
    }

    fn coefficients_of_variation(local: &LocalPreferenceMatrix) -> Vec<f64> {
        let matrix = local.as_matrix();
        (0..matrix.column_count())
            .map(|column| {
                let values: Vec<f64> = matrix.column(column).collect();
                let mean = values.iter().sum::<f64>() / values.len() as f64;
                if mean <= 0.0 {
                    return 0.0;
                }
                let cv = sample_std_dev(&values, mean) / mean;
                // Equal columns leave rounding residue after normalization.
                if cv < DISPERSION_EPSILON {
                    0.0
                } else {
                    cv
                }
            })
            .collect()
    }

    /// Returns the decision matrix this engine was built from.
    pub fn decision_matrix(&self) -> &DecisionMatrix {
        &self.decision
    }

    /// Returns the normalized decision matrix.
    pub fn local_preference(&self) -> &LocalPreferenceMatrix {
        &self.local_preference
    }

    /// Returns a criterion's coefficient of variation, before it is scaled into a weight.
    pub fn gaussian_factor(&self, criterion: &str) -> Option<f64> {
        self.decision
            .criteria()
            .iter()
            .position(|c| c == criterion)
            .map(|i| self.gaussian_factors[i])
    }

    pub fn gaussian_factors(&self) -> impl Iterator<Item = (&str, f64)> {
        self.decision
            .criteria()
            .iter()
            .map(String::as_str)
            .zip(self.gaussian_factors.iter().copied())
    }

    /// Ranks the alternatives of the stored decision matrix.
    pub fn global_preference(&self) -> GlobalPreference {
        self.global_preference.clone()
    }
}

impl PriorityEngine for DispersionWeightEngine {
    fn method(&self) -> Method {
        Method::Gaussian
    }

    fn optimization_map(&self) -> &OptimizationMap {
        &self.optimization
    }

    fn weights(&self) -> &WeightVector {
        &self.weights
    }
}

/// Sample standard deviation (n − 1 denominator). Zero for fewer than two values.
fn sample_std_dev(values: &[f64], mean: f64) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let squares: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
    (squares / (values.len() - 1) as f64).sqrt()
}

//! Judgment Consistency Engine - Saaty's AHP weights and consistency ratio.

use serde::Serialize;
use tracing::{debug, warn};

use super::random_index::{random_index, CONSISTENCY_THRESHOLD, MAX_CRITERIA};
use super::{
    DecisionMatrix, GlobalPreference, JudgmentMatrix, LocalPreferenceMatrix, Method,
    OptimizationMap, PreferenceAggregator, PriorityEngine, WeightVector,
};
use crate::domain::foundation::AnalysisError;

/// Knobs for judgment validation and the consistency verdict.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineOptions {
    /// Reject judgments outside [1/9, 9].
    pub enforce_saaty_scale: bool,
    /// Allowed deviation of `a(i,j) * a(j,i)` from 1 before warning.
    pub reciprocity_tolerance: f64,
    /// Largest consistency ratio treated as consistent.
    pub consistency_threshold: f64,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            enforce_saaty_scale: false,
            reciprocity_tolerance: 1e-6,
            consistency_threshold: CONSISTENCY_THRESHOLD,
        }
    }
}

/// Consistency figures of a judgment matrix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Consistency {
    /// Principal eigenvalue estimate.
    pub lambda_max: f64,
    pub consistency_index: f64,
    pub random_index: f64,
    pub consistency_ratio: f64,
}

/// Derives weights from a pairwise judgment matrix.
///
/// # Algorithm
/// - Weights: normalize each column by its sum, then average each row.
/// - λmax: mean of `(A·w)_i / w_i`.
/// - CI = (λmax − n) / (n − 1), 0 when n = 1.
/// - CR = CI / RI(n), 0 when RI(n) = 0 (n ≤ 2).
///
/// A high CR never fails construction; callers decide via
/// [`is_consistent`](Self::is_consistent).
#[derive(Debug, Clone)]
pub struct JudgmentConsistencyEngine {
    judgments: JudgmentMatrix,
    optimization: OptimizationMap,
    weights: WeightVector,
    consistency: Consistency,
    consistency_threshold: f64,
}

impl JudgmentConsistencyEngine {
    /// Creates an engine that maximizes every criterion.
    pub fn new(judgments: JudgmentMatrix) -> Result<Self, AnalysisError> {
        let optimization = OptimizationMap::maximize_all(judgments.criteria());
        Self::with_optimization(judgments, optimization, EngineOptions::default())
    }

    /// Creates an engine that minimizes the listed criteria.
    pub fn with_minimized<S: AsRef<str>>(
        judgments: JudgmentMatrix,
        minimized: &[S],
    ) -> Result<Self, AnalysisError> {
        let optimization = OptimizationMap::with_minimized(judgments.criteria(), minimized)?;
        Self::with_optimization(judgments, optimization, EngineOptions::default())
    }

    /// Creates an engine with explicit directives and options.
    ///
    /// # Errors
    /// - `TooManyCriteria` above 15 criteria
    /// - `OutOfSaatyScale` when enforcing the scale and a judgment is outside it
    /// - `Shape` when `optimization` does not cover the judgment criteria
    pub fn with_optimization(
        judgments: JudgmentMatrix,
        optimization: OptimizationMap,
        options: EngineOptions,
    ) -> Result<Self, AnalysisError> {
        judgments.ensure_within_random_index()?;
        if options.enforce_saaty_scale {
            judgments.ensure_saaty_scale()?;
        }
        optimization.ensure_criteria(judgments.criteria())?;

        let violations = judgments.reciprocity_violations(options.reciprocity_tolerance);
        if let Some(first) = violations.first() {
            warn!(
                count = violations.len(),
                row = %first.row,
                column = %first.column,
                value = first.value,
                transposed = first.transposed,
                "Judgment matrix is not reciprocal"
            );
        }

        let weights = Self::priority_vector(&judgments);
        let consistency = Self::measure_consistency(&judgments, &weights)?;

        debug!(
            criteria = judgments.size(),
            lambda_max = consistency.lambda_max,
            consistency_ratio = consistency.consistency_ratio,
            "Derived priority vector from judgments"
        );

        Ok(Self {
            judgments,
            optimization,
            weights,
            consistency,
            consistency_threshold: options.consistency_threshold,
        })
    }

    fn priority_vector(judgments: &JudgmentMatrix) -> WeightVector {
        let matrix = judgments.as_matrix();
        let n = judgments.size();
        let column_sums: Vec<f64> = (0..n).map(|c| matrix.column_sum(c)).collect();

        let weights = (0..n)
            .map(|row| {
                let normalized_sum: f64 = matrix
                    .row(row)
                    .iter()
                    .zip(&column_sums)
                    .map(|(a, sum)| a / sum)
                    .sum();
                normalized_sum / n as f64
            })
            .collect();

        WeightVector::new(judgments.criteria().to_vec(), weights)
    }

    fn measure_consistency(
        judgments: &JudgmentMatrix,
        weights: &WeightVector,
    ) -> Result<Consistency, AnalysisError> {
        let matrix = judgments.as_matrix();
        let n = judgments.size();
        let w = weights.as_slice();

        let lambda_max = (0..n)
            .map(|row| {
                let weighted_sum: f64 = matrix.row(row).iter().zip(w).map(|(a, w)| a * w).sum();
                weighted_sum / w[row]
            })
            .sum::<f64>()
            / n as f64;

        let consistency_index = if n > 1 {
            ((lambda_max - n as f64) / (n as f64 - 1.0)).max(0.0)
        } else {
            0.0
        };

        let random_index = random_index(n).ok_or(AnalysisError::TooManyCriteria {
            max: MAX_CRITERIA,
            actual: n,
        })?;

        let consistency_ratio = if random_index > 0.0 {
            consistency_index / random_index
        } else {
            0.0
        };

        Ok(Consistency {
            lambda_max,
            consistency_index,
            random_index,
            consistency_ratio,
        })
    }

    /// Returns the judgment matrix this engine was built from.
    pub fn judgment_matrix(&self) -> &JudgmentMatrix {
        &self.judgments
    }

    pub fn consistency(&self) -> Consistency {
        self.consistency
    }

    pub fn lambda_max(&self) -> f64 {
        self.consistency.lambda_max
    }

    pub fn consistency_index(&self) -> f64 {
        self.consistency.consistency_index
    }

    pub fn consistency_ratio(&self) -> f64 {
        self.consistency.consistency_ratio
    }

    /// Returns the threshold used by [`is_consistent`](Self::is_consistent).
    pub fn consistency_threshold(&self) -> f64 {
        self.consistency_threshold
    }

    /// True when CR does not exceed the configured threshold.
    pub fn is_consistent(&self) -> bool {
        self.consistency.consistency_ratio <= self.consistency_threshold
    }

    /// Normalizes a decision matrix with this engine's directions.
    ///
    /// # Errors
    /// `Shape` when the decision criteria differ from the judgment criteria.
    pub fn local_preference(
        &self,
        decision: &DecisionMatrix,
    ) -> Result<LocalPreferenceMatrix, AnalysisError> {
        decision.ensure_criteria(self.judgments.criteria())?;
        PreferenceAggregator::local_preference(decision, &self.optimization)
    }

    /// Ranks the alternatives of a decision matrix with this engine's weights.
    pub fn global_preference(
        &self,
        decision: &DecisionMatrix,
    ) -> Result<GlobalPreference, AnalysisError> {
        let local = self.local_preference(decision)?;
        PreferenceAggregator::global_preference(&local, &self.weights)
    }
}

impl PriorityEngine for JudgmentConsistencyEngine {
    fn method(&self) -> Method {
        Method::Saaty
    }

    fn optimization_map(&self) -> &OptimizationMap {
        &self.optimization
    }

    fn weights(&self) -> &WeightVector {
        &self.weights
    }
}

//! Preference Aggregator - Local normalization and weighted global ranking.
//!
//! Shared by both weighting engines. Every function is pure: inputs are
//! borrowed and new tables are returned.

use serde::Serialize;

use super::{DecisionMatrix, LabeledMatrix, OptimizationMap, WeightVector};
use crate::domain::foundation::{AnalysisError, Direction};

/// Decision matrix after direction inversion and per-column normalization.
///
/// Every column sums to 1 and larger always means more preferred.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct LocalPreferenceMatrix(LabeledMatrix);

impl LocalPreferenceMatrix {
    pub fn alternatives(&self) -> &[String] {
        self.0.row_labels()
    }

    pub fn criteria(&self) -> &[String] {
        self.0.column_labels()
    }

    /// Returns the local preference of an alternative on a criterion.
    pub fn value(&self, alternative: &str, criterion: &str) -> Option<f64> {
        self.0.value(alternative, criterion)
    }

    /// Returns the underlying labeled matrix.
    pub fn as_matrix(&self) -> &LabeledMatrix {
        &self.0
    }

    /// Returns the alternative with the largest share on a criterion.
    /// Ties resolve to the first alternative.
    pub fn preferred_on(&self, criterion: &str) -> Option<&str> {
        let column = self.0.column_index(criterion)?;
        let mut best: Option<(usize, f64)> = None;
        for (row, value) in self.0.column(column).enumerate() {
            if best.map_or(true, |(_, b)| value > b) {
                best = Some((row, value));
            }
        }
        best.map(|(row, _)| self.alternatives()[row].as_str())
    }
}

/// One row of the global ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedAlternative {
    pub alternative: String,
    /// 1 is best.
    pub rank: usize,
    pub score: f64,
}

/// Alternatives sorted by descending global score.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct GlobalPreference {
    ranking: Vec<RankedAlternative>,
}

impl GlobalPreference {
    /// Returns the ranking, best first.
    pub fn ranking(&self) -> &[RankedAlternative] {
        &self.ranking
    }

    pub fn iter(&self) -> impl Iterator<Item = &RankedAlternative> {
        self.ranking.iter()
    }

    /// Returns the best alternative.
    pub fn winner(&self) -> Option<&RankedAlternative> {
        self.ranking.first()
    }

    /// Looks up an alternative's row.
    pub fn get(&self, alternative: &str) -> Option<&RankedAlternative> {
        self.ranking.iter().find(|r| r.alternative == alternative)
    }

    pub fn rank_of(&self, alternative: &str) -> Option<usize> {
        self.get(alternative).map(|r| r.rank)
    }

    pub fn score_of(&self, alternative: &str) -> Option<f64> {
        self.get(alternative).map(|r| r.score)
    }

    pub fn len(&self) -> usize {
        self.ranking.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranking.is_empty()
    }
}

/// Local and global preference computations.
pub struct PreferenceAggregator;

impl PreferenceAggregator {
    /// Normalizes every criterion column of the decision matrix to sum 1.
    ///
    /// Minimized columns are replaced by their reciprocals first, so the
    /// smallest raw value gets the largest share.
    ///
    /// # Errors
    /// - `Shape` when `optimization` does not cover the matrix criteria
    /// - `InvalidValue` when a minimized column contains 0
    ///
    /// A maximized column of zeros gives every alternative an equal share.
    pub fn local_preference(
        decision: &DecisionMatrix,
        optimization: &OptimizationMap,
    ) -> Result<LocalPreferenceMatrix, AnalysisError> {
        let matrix = decision.as_matrix();
        optimization.ensure_criteria(decision.criteria())?;

        let mut column_sums = Vec::with_capacity(matrix.column_count());
        for (column, criterion) in decision.criteria().iter().enumerate() {
            let direction = optimization.direction_at(column).unwrap_or_default();
            if direction == Direction::Minimize && matrix.column(column).any(|v| v == 0.0) {
                return Err(AnalysisError::invalid_value(
                    criterion.as_str(),
                    "minimized criterion cannot contain 0",
                ));
            }

            let sum: f64 = matrix
                .column(column)
                .map(|v| Self::oriented(v, direction))
                .sum();
            column_sums.push(sum);
        }

        let equal_share = 1.0 / matrix.row_count() as f64;
        let local = matrix.map_cells(|_, column, value| {
            let sum = column_sums[column];
            if sum <= 0.0 {
                // All-zero column: no alternative is preferred.
                return equal_share;
            }
            let direction = optimization.direction_at(column).unwrap_or_default();
            Self::oriented(value, direction) / sum
        });

        Ok(LocalPreferenceMatrix(local))
    }

    fn oriented(value: f64, direction: Direction) -> f64 {
        match direction {
            Direction::Maximize => value,
            Direction::Minimize => 1.0 / value,
        }
    }

    /// Weighted sum of local preferences, ranked best first.
    ///
    /// Sorting is stable, so equal scores keep input order.
    ///
    /// # Errors
    /// `Shape` when the weight vector's criteria differ from the matrix's.
    pub fn global_preference(
        local: &LocalPreferenceMatrix,
        weights: &WeightVector,
    ) -> Result<GlobalPreference, AnalysisError> {
        if weights.criteria() != local.criteria() {
            return Err(AnalysisError::shape(format!(
                "weights cover [{}] but local preferences cover [{}]",
                weights.criteria().join(", "),
                local.criteria().join(", ")
            )));
        }

        let matrix = local.as_matrix();
        let mut scored: Vec<(String, f64)> = local
            .alternatives()
            .iter()
            .enumerate()
            .map(|(row, alternative)| {
                let score = matrix
                    .row(row)
                    .iter()
                    .zip(weights.as_slice())
                    .map(|(p, w)| p * w)
                    .sum();
                (alternative.clone(), score)
            })
            .collect();

        scored.sort_by(|a, b| b.1.total_cmp(&a.1));

        let ranking = scored
            .into_iter()
            .enumerate()
            .map(|(i, (alternative, score))| RankedAlternative {
                alternative,
                rank: i + 1,
                score,
            })
            .collect();

        Ok(GlobalPreference { ranking })
    }
}

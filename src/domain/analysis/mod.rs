//! Analysis Module - Pure domain services for AHP decision analysis.
//!
//! # Components
//!
//! - `LabeledMatrix` - Dense numeric table with row and column labels
//! - `JudgmentMatrix` / `DecisionMatrix` - Validated inputs
//! - `JudgmentConsistencyEngine` - Saaty weights, λmax, CI and CR
//! - `DispersionWeightEngine` - Gaussian weights from coefficient of variation
//! - `PreferenceAggregator` - Local normalization and global ranking
//!
//! # Design Philosophy
//!
//! Everything here is synchronous and free of I/O. Engines are immutable
//! once built and can be shared across threads.

mod decision_matrix;
mod engine;
mod gaussian;
mod judgment_matrix;
mod labeled_matrix;
mod optimization;
mod preference_aggregator;
mod random_index;
mod saaty;
mod weights;

// Re-export all public types
pub use decision_matrix::DecisionMatrix;
pub use engine::{Method, PriorityEngine};
pub use gaussian::DispersionWeightEngine;
pub use judgment_matrix::{JudgmentMatrix, ReciprocityViolation};
pub use labeled_matrix::{LabeledMatrix, LabeledMatrixBuilder};
pub use optimization::OptimizationMap;
pub use preference_aggregator::{
    GlobalPreference, LocalPreferenceMatrix, PreferenceAggregator, RankedAlternative,
};
pub use random_index::{
    random_index, CONSISTENCY_THRESHOLD, MAX_CRITERIA, RANDOM_INDEX, SAATY_SCALE_MAX,
    SAATY_SCALE_MIN,
};
pub use saaty::{Consistency, EngineOptions, JudgmentConsistencyEngine};
pub use weights::WeightVector;

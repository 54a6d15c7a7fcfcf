//! Priority Engine - Common surface of the weighting methods.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{OptimizationMap, WeightVector};

/// Weighting method used to derive criterion weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    /// Pairwise judgments with eigenvector approximation and consistency check.
    Saaty,
    /// Coefficient of variation of the alternatives' local preferences.
    Gaussian,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Saaty => write!(f, "saaty"),
            Method::Gaussian => write!(f, "gaussian"),
        }
    }
}

/// Queries shared by every weighting engine.
pub trait PriorityEngine {
    fn method(&self) -> Method;

    /// Direction of every criterion, fixed at construction.
    fn optimization_map(&self) -> &OptimizationMap;

    /// Derived criterion weights, summing to 1.
    fn weights(&self) -> &WeightVector;

    /// Criteria in weight order.
    fn criteria(&self) -> &[String] {
        self.weights().criteria()
    }
}

//! Weight Vector - Normalized importance of each criterion.

use serde::{Serialize, Serializer};

/// Criterion weights, non-negative and summing to 1.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightVector {
    criteria: Vec<String>,
    weights: Vec<f64>,
}

impl WeightVector {
    /// Pairs criteria with already-normalized weights.
    pub(crate) fn new(criteria: Vec<String>, weights: Vec<f64>) -> Self {
        debug_assert_eq!(criteria.len(), weights.len());
        Self { criteria, weights }
    }

    /// Normalizes `raw` by its sum. Falls back to uniform weights when the
    /// sum is zero.
    pub(crate) fn normalized(criteria: Vec<String>, raw: Vec<f64>) -> Self {
        let total: f64 = raw.iter().sum();
        let weights = if total > 0.0 {
            raw.iter().map(|w| w / total).collect()
        } else {
            let uniform = 1.0 / raw.len() as f64;
            vec![uniform; raw.len()]
        };
        Self::new(criteria, weights)
    }

    /// Returns the weight of a criterion.
    pub fn get(&self, criterion: &str) -> Option<f64> {
        self.criteria
            .iter()
            .position(|c| c == criterion)
            .map(|i| self.weights[i])
    }

    pub fn criteria(&self) -> &[String] {
        &self.criteria
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.weights
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.criteria
            .iter()
            .map(String::as_str)
            .zip(self.weights.iter().copied())
    }

    pub fn sum(&self) -> f64 {
        self.weights.iter().sum()
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

impl Serialize for WeightVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

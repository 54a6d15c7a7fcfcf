//! Optimization Map - Direction of every criterion, fixed at construction.

use serde::{Serialize, Serializer};

use crate::domain::foundation::{AnalysisError, Direction};

/// Ordered mapping from criterion to [`Direction`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptimizationMap {
    entries: Vec<(String, Direction)>,
}

impl OptimizationMap {
    /// Every criterion is maximized.
    pub fn maximize_all(criteria: &[String]) -> Self {
        Self {
            entries: criteria
                .iter()
                .map(|c| (c.clone(), Direction::Maximize))
                .collect(),
        }
    }

    /// Every criterion is maximized except those listed in `minimized`.
    ///
    /// # Errors
    /// `UnknownCriterion` when a listed name is not in `criteria`.
    pub fn with_minimized<S: AsRef<str>>(
        criteria: &[String],
        minimized: &[S],
    ) -> Result<Self, AnalysisError> {
        let mut map = Self::maximize_all(criteria);
        for name in minimized {
            map.set(name.as_ref(), Direction::Minimize)?;
        }
        Ok(map)
    }

    fn set(&mut self, criterion: &str, direction: Direction) -> Result<(), AnalysisError> {
        let entry = self
            .entries
            .iter_mut()
            .find(|(c, _)| c == criterion)
            .ok_or_else(|| AnalysisError::unknown_criterion(criterion))?;
        entry.1 = direction;
        Ok(())
    }

    /// Returns a copy with one criterion's direction reversed.
    pub fn flipped(&self, criterion: &str) -> Result<Self, AnalysisError> {
        let current = self
            .direction(criterion)
            .ok_or_else(|| AnalysisError::unknown_criterion(criterion))?;
        let mut map = self.clone();
        map.set(criterion, current.flipped())?;
        Ok(map)
    }

    /// Returns the direction of a criterion.
    pub fn direction(&self, criterion: &str) -> Option<Direction> {
        self.entries
            .iter()
            .find(|(c, _)| c == criterion)
            .map(|(_, d)| *d)
    }

    /// Returns the direction at a column position.
    pub fn direction_at(&self, index: usize) -> Option<Direction> {
        self.entries.get(index).map(|(_, d)| *d)
    }

    /// Returns the minimized criteria in order.
    pub fn minimized(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(_, d)| d.is_minimize())
            .map(|(c, _)| c.as_str())
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Direction)> {
        self.entries.iter().map(|(c, d)| (c.as_str(), *d))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Fails unless this map covers exactly `criteria`, in order.
    pub fn ensure_criteria(&self, criteria: &[String]) -> Result<(), AnalysisError> {
        let aligned = self.entries.len() == criteria.len()
            && self.entries.iter().zip(criteria).all(|((c, _), e)| c == e);
        if !aligned {
            return Err(AnalysisError::shape(format!(
                "optimization directives cover {} criteria, matrix has {}",
                self.entries.len(),
                criteria.len()
            )));
        }
        Ok(())
    }
}

impl Serialize for OptimizationMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

//! Optimization direction of a criterion.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether larger or smaller raw values are preferred on a criterion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// The more the better.
    #[default]
    #[serde(alias = "max")]
    Maximize,
    /// The less the better.
    #[serde(alias = "min")]
    Minimize,
}

impl Direction {
    /// Returns the short label.
    pub fn label(&self) -> &'static str {
        match self {
            Direction::Maximize => "max",
            Direction::Minimize => "min",
        }
    }

    /// Returns the opposite direction.
    pub fn flipped(&self) -> Self {
        match self {
            Direction::Maximize => Direction::Minimize,
            Direction::Minimize => Direction::Maximize,
        }
    }

    pub fn is_minimize(&self) -> bool {
        matches!(self, Direction::Minimize)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_default_is_maximize() {
        assert_eq!(Direction::default(), Direction::Maximize);
    }

    #[test]
    fn direction_flipped_swaps() {
        assert_eq!(Direction::Maximize.flipped(), Direction::Minimize);
        assert_eq!(Direction::Minimize.flipped(), Direction::Maximize);
    }

    #[test]
    fn direction_displays_short_label() {
        assert_eq!(format!("{}", Direction::Maximize), "max");
        assert_eq!(format!("{}", Direction::Minimize), "min");
    }

    #[test]
    fn direction_serializes_to_json() {
        let json = serde_json::to_string(&Direction::Minimize).unwrap();
        assert_eq!(json, "\"minimize\"");
    }

    #[test]
    fn direction_deserializes_short_aliases() {
        let d: Direction = serde_json::from_str("\"min\"").unwrap();
        assert_eq!(d, Direction::Minimize);
        let d: Direction = serde_json::from_str("\"maximize\"").unwrap();
        assert_eq!(d, Direction::Maximize);
    }
}

//! Analysis configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::analysis::{EngineOptions, CONSISTENCY_THRESHOLD};

/// Tuning for judgment validation and consistency reporting
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisConfig {
    /// Largest consistency ratio reported as consistent
    #[serde(default = "default_consistency_threshold")]
    pub consistency_threshold: f64,

    /// Allowed deviation of a(i,j) * a(j,i) from 1 before warning
    #[serde(default = "default_reciprocity_tolerance")]
    pub reciprocity_tolerance: f64,

    /// Reject judgments outside the Saaty scale [1/9, 9]
    #[serde(default)]
    pub enforce_saaty_scale: bool,
}

impl AnalysisConfig {
    /// Engine options derived from this configuration
    pub fn engine_options(&self) -> EngineOptions {
        EngineOptions {
            enforce_saaty_scale: self.enforce_saaty_scale,
            reciprocity_tolerance: self.reciprocity_tolerance,
            consistency_threshold: self.consistency_threshold,
        }
    }

    /// Validate analysis configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(self.consistency_threshold > 0.0 && self.consistency_threshold <= 1.0) {
            return Err(ValidationError::InvalidConsistencyThreshold);
        }
        if !(self.reciprocity_tolerance.is_finite() && self.reciprocity_tolerance > 0.0) {
            return Err(ValidationError::InvalidReciprocityTolerance);
        }
        Ok(())
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            consistency_threshold: default_consistency_threshold(),
            reciprocity_tolerance: default_reciprocity_tolerance(),
            enforce_saaty_scale: false,
        }
    }
}

fn default_consistency_threshold() -> f64 {
    CONSISTENCY_THRESHOLD
}

fn default_reciprocity_tolerance() -> f64 {
    1e-6
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_config_defaults() {
        let config = AnalysisConfig::default();
        assert_eq!(config.consistency_threshold, 0.10);
        assert!(!config.enforce_saaty_scale);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_engine_options_mirror_config() {
        let config = AnalysisConfig {
            consistency_threshold: 0.2,
            reciprocity_tolerance: 1e-3,
            enforce_saaty_scale: true,
        };
        let options = config.engine_options();
        assert_eq!(options.consistency_threshold, 0.2);
        assert_eq!(options.reciprocity_tolerance, 1e-3);
        assert!(options.enforce_saaty_scale);
    }

    #[test]
    fn test_validation_rejects_bad_threshold() {
        let config = AnalysisConfig {
            consistency_threshold: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidConsistencyThreshold)
        ));
    }

    #[test]
    fn test_validation_rejects_bad_tolerance() {
        let config = AnalysisConfig {
            reciprocity_tolerance: f64::NAN,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidReciprocityTolerance)
        ));
    }

    #[test]
    fn test_analysis_config_deserialization() {
        let json = r#"{ "consistency_threshold": 0.05, "enforce_saaty_scale": true }"#;
        let config: AnalysisConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.consistency_threshold, 0.05);
        assert_eq!(config.reciprocity_tolerance, 1e-6);
        assert!(config.enforce_saaty_scale);
    }
}

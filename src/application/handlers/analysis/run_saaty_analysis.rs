//! RunSaatyAnalysisHandler - Command handler for judgment-based weighting.
//!
//! Builds a judgment engine from the command's tables, ranks the decision
//! matrix when one is supplied, and reports consistency.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::{AnalysisReport, TableInput};
use crate::config::AnalysisConfig;
use crate::domain::analysis::{
    DecisionMatrix, JudgmentConsistencyEngine, JudgmentMatrix, OptimizationMap,
};
use crate::domain::foundation::AnalysisError;

/// Command to run the Saaty method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSaatyAnalysisCommand {
    /// Square pairwise judgment table over the criteria.
    pub judgments: TableInput,
    /// Alternatives × criteria. Optional: without it only weights are reported.
    #[serde(default)]
    pub decision: Option<TableInput>,
    /// Criteria where smaller values are better.
    #[serde(default)]
    pub minimize: Vec<String>,
}

/// Handler for running the Saaty method.
pub struct RunSaatyAnalysisHandler {
    config: AnalysisConfig,
}

impl RunSaatyAnalysisHandler {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    pub fn handle(&self, cmd: RunSaatyAnalysisCommand) -> Result<AnalysisReport, AnalysisError> {
        let judgments = JudgmentMatrix::new(cmd.judgments.to_matrix()?)?;
        let optimization = OptimizationMap::with_minimized(judgments.criteria(), &cmd.minimize)?;
        let engine = JudgmentConsistencyEngine::with_optimization(
            judgments,
            optimization,
            self.config.engine_options(),
        )?;

        if !engine.is_consistent() {
            warn!(
                consistency_ratio = engine.consistency_ratio(),
                threshold = engine.consistency_threshold(),
                "Judgment matrix is inconsistent, weights may be unreliable"
            );
        }

        let preferences = match cmd.decision {
            Some(table) => {
                let decision = DecisionMatrix::new(table.to_matrix()?)?;
                let local = engine.local_preference(&decision)?;
                let global = engine.global_preference(&decision)?;
                Some((local, global))
            }
            None => None,
        };

        let report = AnalysisReport::from_saaty(&engine, preferences);
        info!(
            criteria = report.weights.len(),
            alternatives = report.ranking.as_ref().map_or(0, |r| r.len()),
            "Saaty analysis completed"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::analysis::{RawCell, RowInput};
    use crate::domain::analysis::Method;

    fn row(label: &str, values: Vec<RawCell>) -> RowInput {
        RowInput {
            label: label.to_string(),
            values,
        }
    }

    fn n(value: f64) -> RawCell {
        RawCell::Number(value)
    }

    fn t(text: &str) -> RawCell {
        RawCell::Text(text.to_string())
    }

    fn phone_command() -> RunSaatyAnalysisCommand {
        let criteria = vec!["Custo", "Camera", "Armazenamento", "Bateria"];
        let columns: Vec<String> = criteria.iter().map(|c| c.to_string()).collect();
        RunSaatyAnalysisCommand {
            judgments: TableInput {
                columns: columns.clone(),
                rows: vec![
                    row("Custo", vec![n(1.0), n(3.0), n(5.0), n(7.0)]),
                    row("Camera", vec![t("1/3"), n(1.0), n(3.0), n(7.0)]),
                    row("Armazenamento", vec![t("1/5"), t("1/3"), n(1.0), n(3.0)]),
                    row("Bateria", vec![t("1/7"), t("1/7"), t("1/3"), n(1.0)]),
                ],
            },
            decision: Some(TableInput {
                columns,
                rows: vec![
                    row("Xiaomi", vec![n(1200.0), n(12.0), n(64.0), n(24.0)]),
                    row("Samsung", vec![n(1500.0), n(12.0), n(128.0), n(18.0)]),
                    row("Iphone", vec![n(5000.0), n(20.0), n(128.0), n(10.0)]),
                ],
            }),
            minimize: vec!["Custo".to_string()],
        }
    }

    #[test]
    fn ranks_phones() {
        let handler = RunSaatyAnalysisHandler::new(AnalysisConfig::default());
        let report = handler.handle(phone_command()).unwrap();

        assert_eq!(report.method, Method::Saaty);
        let ranking = report.ranking.unwrap();
        assert_eq!(ranking.winner().unwrap().alternative, "Xiaomi");
        assert!((ranking.score_of("Xiaomi").unwrap() - 0.3932).abs() < 1e-4);
        let consistency = report.consistency.unwrap();
        assert!(consistency.is_consistent);
        assert!((consistency.figures.consistency_ratio - 0.0521).abs() < 1e-4);
    }

    #[test]
    fn weights_only_without_decision() {
        let handler = RunSaatyAnalysisHandler::new(AnalysisConfig::default());
        let mut cmd = phone_command();
        cmd.decision = None;
        let report = handler.handle(cmd).unwrap();
        assert!(report.ranking.is_none());
        assert!(report.local_preference.is_none());
        assert!((report.weights.get("Custo").unwrap() - 0.5479).abs() < 1e-4);
    }

    #[test]
    fn unknown_minimized_criterion_fails() {
        let handler = RunSaatyAnalysisHandler::new(AnalysisConfig::default());
        let mut cmd = phone_command();
        cmd.minimize = vec!["Preco".to_string()];
        assert!(matches!(
            handler.handle(cmd),
            Err(AnalysisError::UnknownCriterion { .. })
        ));
    }

    #[test]
    fn strict_scale_rejects_out_of_range_judgment() {
        let config = AnalysisConfig {
            enforce_saaty_scale: true,
            ..AnalysisConfig::default()
        };
        let handler = RunSaatyAnalysisHandler::new(config);
        let mut cmd = phone_command();
        cmd.judgments.rows[0].values[3] = n(12.0);
        assert!(matches!(
            handler.handle(cmd),
            Err(AnalysisError::OutOfSaatyScale { .. })
        ));
    }

    #[test]
    fn command_deserializes_without_optional_fields() {
        let json = r#"{
            "judgments": { "columns": ["A", "B"], "rows": [
                { "label": "A", "values": [1, 2] },
                { "label": "B", "values": ["1/2", 1] }
            ] }
        }"#;
        let cmd: RunSaatyAnalysisCommand = serde_json::from_str(json).unwrap();
        assert!(cmd.decision.is_none());
        assert!(cmd.minimize.is_empty());
    }
}

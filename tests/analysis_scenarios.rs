//! End-to-end scenarios through the public domain API.
//!
//! 1. Director hiring: criteria weights from judgments, alternative
//!    scores from per-criterion judgment matrices plus raw ages
//! 2. Phone purchase with the Saaty method
//! 3. Phone purchase with the Gaussian method

use ahp_decision::domain::analysis::{
    DecisionMatrix, DispersionWeightEngine, JudgmentConsistencyEngine, JudgmentMatrix,
    PriorityEngine,
};
use ahp_decision::domain::foundation::AnalysisError;

const EPS: f64 = 1e-4;

// =============================================================================
// Fixtures
// =============================================================================

fn director_criteria() -> JudgmentMatrix {
    JudgmentMatrix::from_rows(
        vec!["Experience", "Education", "Charisma", "Age"],
        vec![
            vec![1.0, 4.0, 3.0, 7.0],
            vec![1.0 / 4.0, 1.0, 1.0 / 3.0, 3.0],
            vec![1.0 / 3.0, 3.0, 1.0, 5.0],
            vec![1.0 / 7.0, 1.0 / 3.0, 1.0 / 5.0, 1.0],
        ],
    )
    .unwrap()
}

fn candidate_weights(rows: Vec<Vec<f64>>) -> Vec<f64> {
    let judgments = JudgmentMatrix::from_rows(vec!["Tom", "Dick", "Harry"], rows).unwrap();
    let engine = JudgmentConsistencyEngine::new(judgments).unwrap();
    engine.weights().as_slice().to_vec()
}

fn director_decision() -> DecisionMatrix {
    let experience = candidate_weights(vec![
        vec![1.0, 1.0 / 4.0, 4.0],
        vec![4.0, 1.0, 9.0],
        vec![1.0 / 4.0, 1.0 / 9.0, 1.0],
    ]);
    let education = candidate_weights(vec![
        vec![1.0, 3.0, 1.0 / 5.0],
        vec![1.0 / 3.0, 1.0, 1.0 / 7.0],
        vec![5.0, 7.0, 1.0],
    ]);
    let charisma = candidate_weights(vec![
        vec![1.0, 5.0, 9.0],
        vec![1.0 / 5.0, 1.0, 4.0],
        vec![1.0 / 9.0, 1.0 / 4.0, 1.0],
    ]);
    let age = [50.0, 60.0, 30.0];

    let rows = (0..3)
        .map(|i| vec![experience[i], education[i], charisma[i], age[i]])
        .collect();

    DecisionMatrix::from_rows(
        vec!["Tom", "Dick", "Harry"],
        vec!["Experience", "Education", "Charisma", "Age"],
        rows,
    )
    .unwrap()
}

fn phone_criteria() -> JudgmentMatrix {
    JudgmentMatrix::from_rows(
        vec!["Custo", "Camera", "Armazenamento", "Bateria"],
        vec![
            vec![1.0, 3.0, 5.0, 7.0],
            vec![1.0 / 3.0, 1.0, 3.0, 7.0],
            vec![1.0 / 5.0, 1.0 / 3.0, 1.0, 3.0],
            vec![1.0 / 7.0, 1.0 / 7.0, 1.0 / 3.0, 1.0],
        ],
    )
    .unwrap()
}

fn phones() -> DecisionMatrix {
    DecisionMatrix::from_rows(
        vec!["Xiaomi", "Samsung", "Iphone"],
        vec!["Custo", "Camera", "Armazenamento", "Bateria"],
        vec![
            vec![1200.0, 12.0, 64.0, 24.0],
            vec![1500.0, 12.0, 128.0, 18.0],
            vec![5000.0, 20.0, 128.0, 10.0],
        ],
    )
    .unwrap()
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn director_hiring_ranks_dick_first() {
    let engine = JudgmentConsistencyEngine::new(director_criteria()).unwrap();
    assert!(engine.is_consistent());
    assert!((engine.consistency_ratio() - 0.0442).abs() < EPS);

    let ranking = engine.global_preference(&director_decision()).unwrap();
    let order: Vec<(&str, usize)> = ranking
        .iter()
        .map(|r| (r.alternative.as_str(), r.rank))
        .collect();
    assert_eq!(order, vec![("Dick", 1), ("Tom", 2), ("Harry", 3)]);

    assert!((ranking.score_of("Dick").unwrap() - 0.4745).abs() < EPS);
    assert!((ranking.score_of("Tom").unwrap() - 0.3642).abs() < EPS);
    assert!((ranking.score_of("Harry").unwrap() - 0.1613).abs() < EPS);
}

#[test]
fn phone_purchase_with_saaty() {
    let engine = JudgmentConsistencyEngine::with_minimized(phone_criteria(), &["Custo"]).unwrap();

    let w = engine.weights();
    assert!((w.get("Custo").unwrap() - 0.5479).abs() < EPS);
    assert!((w.get("Camera").unwrap() - 0.2831).abs() < EPS);
    assert!((w.get("Armazenamento").unwrap() - 0.1169).abs() < EPS);
    assert!((w.get("Bateria").unwrap() - 0.0521).abs() < EPS);

    let ranking = engine.global_preference(&phones()).unwrap();
    assert_eq!(ranking.winner().unwrap().alternative, "Xiaomi");
    assert!((ranking.score_of("Xiaomi").unwrap() - 0.3932).abs() < EPS);
    assert!((ranking.score_of("Samsung").unwrap() - 0.3569).abs() < EPS);
    assert!((ranking.score_of("Iphone").unwrap() - 0.2499).abs() < EPS);
}

#[test]
fn phone_purchase_with_gaussian() {
    let engine = DispersionWeightEngine::with_minimized(phones(), &["Custo"]).unwrap();
    let ranking = engine.global_preference();

    assert_eq!(ranking.rank_of("Xiaomi"), Some(1));
    assert_eq!(ranking.rank_of("Samsung"), Some(2));
    assert_eq!(ranking.rank_of("Iphone"), Some(3));
    assert!((ranking.score_of("Xiaomi").unwrap() - 0.3805).abs() < EPS);
    assert!((ranking.score_of("Samsung").unwrap() - 0.3596).abs() < EPS);
    assert!((ranking.score_of("Iphone").unwrap() - 0.2599).abs() < EPS);
}

#[test]
fn decision_matrix_must_match_judgment_criteria() {
    let engine = JudgmentConsistencyEngine::new(director_criteria()).unwrap();
    let result = engine.global_preference(&phones());
    assert!(matches!(result, Err(AnalysisError::Shape { .. })));
}

#[test]
fn both_methods_agree_on_phone_winner() {
    let saaty = JudgmentConsistencyEngine::with_minimized(phone_criteria(), &["Custo"])
        .unwrap()
        .global_preference(&phones())
        .unwrap();
    let gaussian = DispersionWeightEngine::with_minimized(phones(), &["Custo"])
        .unwrap()
        .global_preference();

    assert_eq!(
        saaty.winner().unwrap().alternative,
        gaussian.winner().unwrap().alternative
    );
}

//! Integration tests for analysis HTTP endpoints.
//!
//! These tests drive the full router:
//! 1. Reports serialize with weights, consistency and ranking
//! 2. Domain errors map to the documented status codes
//! 3. Health endpoint responds

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use ahp_decision::adapters::api_router;
use ahp_decision::config::AnalysisConfig;

// =============================================================================
// Test Infrastructure
// =============================================================================

fn app() -> Router {
    api_router(AnalysisConfig::default())
}

async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

fn phone_decision() -> Value {
    json!({
        "columns": ["Custo", "Camera", "Armazenamento", "Bateria"],
        "rows": [
            { "label": "Xiaomi", "values": [1200, 12, 64, 24] },
            { "label": "Samsung", "values": [1500, 12, 128, 18] },
            { "label": "Iphone", "values": [5000, 20, 128, 10] }
        ]
    })
}

fn phone_judgments() -> Value {
    json!({
        "columns": ["Custo", "Camera", "Armazenamento", "Bateria"],
        "rows": [
            { "label": "Custo", "values": [1, 3, 5, 7] },
            { "label": "Camera", "values": ["1/3", 1, 3, 7] },
            { "label": "Armazenamento", "values": ["1/5", "1/3", 1, 3] },
            { "label": "Bateria", "values": ["1/7", "1/7", "1/3", 1] }
        ]
    })
}

// =============================================================================
// Saaty
// =============================================================================

#[tokio::test]
async fn saaty_ranks_phones() {
    let body = json!({
        "judgments": phone_judgments(),
        "decision": phone_decision(),
        "minimize": ["Custo"]
    });

    let (status, json) = post_json(app(), "/api/analysis/saaty", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["method"], "saaty");
    assert_eq!(json["consistency"]["is_consistent"], true);
    assert_eq!(json["ranking"][0]["alternative"], "Xiaomi");
    assert_eq!(json["ranking"][0]["rank"], 1);

    let custo = json["weights"]["Custo"].as_f64().unwrap();
    assert!((custo - 0.5479).abs() < 1e-4);
}

#[tokio::test]
async fn saaty_without_decision_reports_weights_only() {
    let body = json!({ "judgments": phone_judgments() });

    let (status, json) = post_json(app(), "/api/analysis/saaty", body).await;

    assert_eq!(status, StatusCode::OK);
    assert!(json.get("ranking").is_none());
    assert!(json["consistency"]["consistency_ratio"].as_f64().unwrap() < 0.10);
}

#[tokio::test]
async fn saaty_unknown_minimized_criterion_is_422() {
    let body = json!({
        "judgments": phone_judgments(),
        "minimize": ["Peso"]
    });

    let (status, json) = post_json(app(), "/api/analysis/saaty", body).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["code"], "UNKNOWN_CRITERION");
}

#[tokio::test]
async fn saaty_non_square_judgments_is_400() {
    let body = json!({
        "judgments": {
            "columns": ["A", "B"],
            "rows": [{ "label": "A", "values": [1, 2] }]
        }
    });

    let (status, json) = post_json(app(), "/api/analysis/saaty", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "SHAPE_ERROR");
}

#[tokio::test]
async fn saaty_text_cell_is_400() {
    let body = json!({
        "judgments": {
            "columns": ["A", "B"],
            "rows": [
                { "label": "A", "values": [1, "muito"] },
                { "label": "B", "values": ["1/2", 1] }
            ]
        }
    });

    let (status, json) = post_json(app(), "/api/analysis/saaty", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "DATA_TYPE_ERROR");
    assert_eq!(json["details"]["value"], "muito");
}

// =============================================================================
// Gaussian
// =============================================================================

#[tokio::test]
async fn gaussian_ranks_phones() {
    let body = json!({ "decision": phone_decision(), "minimize": ["Custo"] });

    let (status, json) = post_json(app(), "/api/analysis/gaussian", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["method"], "gaussian");
    assert!(json.get("consistency").is_none());
    assert_eq!(json["gaussian_factors"].as_array().unwrap().len(), 4);

    let order: Vec<&str> = json["ranking"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["alternative"].as_str().unwrap())
        .collect();
    assert_eq!(order, vec!["Xiaomi", "Samsung", "Iphone"]);
}

#[tokio::test]
async fn gaussian_negative_value_is_422() {
    let body = json!({
        "decision": {
            "columns": ["Price"],
            "rows": [
                { "label": "A", "values": [10] },
                { "label": "B", "values": [-5] }
            ]
        }
    });

    let (status, json) = post_json(app(), "/api/analysis/gaussian", body).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["code"], "INVALID_VALUE");
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn health_reports_ok() {
    let response = app()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["status"], "ok");
}

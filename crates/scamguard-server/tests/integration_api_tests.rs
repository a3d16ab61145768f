//! Integration tests for REST API endpoints
//!
//! These tests build the real router over in-memory and failing sources and
//! drive it end-to-end with `oneshot` requests.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use scamguard_core::Report;
use scamguard_runtime::{AnalysisService, MemorySource, ReportSource, RuntimeError};
use scamguard_server::api::create_router;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

/// Source that always fails, standing in for an unreachable upstream
struct UnavailableSource;

#[async_trait::async_trait]
impl ReportSource for UnavailableSource {
    async fn fetch_reports(&self) -> scamguard_runtime::Result<Vec<Report>> {
        Err(RuntimeError::Source("report store unreachable".to_string()))
    }

    fn describe(&self) -> String {
        "unavailable".to_string()
    }
}

fn router_with(source: Arc<dyn ReportSource>) -> Router {
    create_router(Arc::new(AnalysisService::new(source)))
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&body).unwrap();
    (status, json)
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = router_with(Arc::new(MemorySource::demo()));

    let (status, json) = get(app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn test_analyze_demo_reports() {
    let app = router_with(Arc::new(MemorySource::demo()));

    let (status, json) = get(app, "/v1/analyze").await;

    assert_eq!(status, StatusCode::OK);
    let reports = json.as_array().expect("array response");
    assert_eq!(reports.len(), 6);

    let first = &reports[0];
    assert_eq!(first["id"], 1);
    assert_eq!(first["type"], "Phishing");
    assert_eq!(first["location"], "Mumbai");
    assert_eq!(first["is_fraud"], true);
    assert_eq!(first["confidence_score"], 95.0);
    assert_eq!(first["system_accuracy"], 90.1);
    assert_eq!(first["fraud_score"], 90);

    let ids: Vec<i64> = reports.iter().map(|r| r["id"].as_i64().unwrap()).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);

    let fraud_ids: Vec<i64> = reports
        .iter()
        .filter(|r| r["is_fraud"] == true)
        .map(|r| r["id"].as_i64().unwrap())
        .collect();
    assert_eq!(fraud_ids, vec![1, 3]);
}

#[tokio::test]
async fn test_analyze_empty_source() {
    let app = router_with(Arc::new(MemorySource::default()));

    let (status, json) = get(app, "/v1/analyze").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, serde_json::json!([]));
}

#[tokio::test]
async fn test_analyze_source_failure_is_not_200() {
    let app = router_with(Arc::new(UnavailableSource));

    let (status, json) = get(app, "/v1/analyze").await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(json["status"], 502);
    assert!(json["error"]
        .as_str()
        .unwrap()
        .contains("report store unreachable"));
}

#[tokio::test]
async fn test_rules_endpoint() {
    let app = router_with(Arc::new(MemorySource::demo()));

    let (status, json) = get(app, "/v1/rules").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["fraud_threshold"], 50);
    let points: Vec<u64> = json["rules"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["points"].as_u64().unwrap())
        .collect();
    assert_eq!(points, vec![40, 30, 20, 10]);
}

#[tokio::test]
async fn test_unknown_route_returns_json_404() {
    let app = router_with(Arc::new(MemorySource::demo()));

    let (status, json) = get(app, "/v2/analyze").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["status"], 404);
    assert!(json["error"].as_str().unwrap().contains("/v2/analyze"));
}

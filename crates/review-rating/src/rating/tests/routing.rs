use super::common::*;
use axum::body::Body;
use axum::extract::{Query, State};
use axum::http::{header, Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use crate::rating::router::{classify_handler, ClassifyQuery};

#[tokio::test]
async fn compute_route_scores_with_requested_profile() {
    let payload = json!({
        "scores": {
            "performance": 9,
            "stability": 8,
            "coverage": 7,
            "software": 6,
            "value": 5
        },
        "profile": "gaming"
    });

    let response = router()
        .oneshot(
            Request::post("/api/v1/ratings/compute")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&payload).unwrap()))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["profile"], "gaming");
    assert_eq!(body["formatted_total"], "7.8");
    assert_eq!(body["classification"]["band"], "good");
    assert_eq!(body["record"]["stability_score"], 8.0);
    assert_eq!(body["criteria"].as_array().map(Vec::len), Some(5));
    assert!(body["computed_at"].is_string());
    assert_eq!(body["diagnostics"], json!([]));
}

#[tokio::test]
async fn compute_route_defaults_profile_and_reports_diagnostics() {
    let payload = json!({
        "scores": { "performance": 15, "battery": 3 },
    });

    let response = router()
        .oneshot(
            Request::post("/api/v1/ratings/compute")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&payload).unwrap()))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["profile"], "general");
    assert_eq!(body["breakdown"]["performance"], 10.0);
    assert_eq!(body["diagnostics"][0]["kind"], "unknown_criterion");
    assert_eq!(body["diagnostics"][0]["criterion"], "battery");
}

#[tokio::test]
async fn compute_route_rejects_malformed_payloads() {
    let response = router()
        .oneshot(
            Request::post("/api/v1/ratings/compute")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"scores": {"performance": "high"}}"#))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn profiles_route_lists_resolved_weights() {
    let response = router()
        .oneshot(
            Request::get("/api/v1/ratings/profiles")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    let profiles = body.as_array().expect("profile list");
    assert_eq!(profiles.len(), 4);
    assert_eq!(profiles[0]["id"], "general");
    assert_eq!(profiles[0]["weights"]["performance"], 0.35);
    assert_eq!(profiles[1]["id"], "gaming");
    assert_eq!(profiles[1]["weights"]["stability"], 0.40);
}

#[tokio::test]
async fn criteria_route_lists_registry() {
    let response = router()
        .oneshot(
            Request::get("/api/v1/ratings/criteria")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");

    let body = read_json_body(response).await;
    let ids: Vec<_> = body
        .as_array()
        .expect("criteria list")
        .iter()
        .map(|criterion| criterion["id"].as_str().unwrap_or_default().to_string())
        .collect();
    assert_eq!(
        ids,
        ["performance", "stability", "coverage", "software", "value"]
    );
}

#[tokio::test]
async fn classify_route_clamps_before_banding() {
    let response = router()
        .oneshot(
            Request::get("/api/v1/ratings/classify?total=12.5")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["total"], 10.0);
    assert_eq!(body["classification"]["label"], "Mükemmel");
}

#[tokio::test]
async fn classify_handler_bands_weak_totals() {
    let response = classify_handler(State(rating_service()), Query(ClassifyQuery { total: 3.2 })).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["classification"]["band"], "weak");
}

#[tokio::test]
async fn sheet_route_scores_csv_rows() {
    let csv = "review,profile,performance,stability,coverage,software,value\n\
ax-3000,gaming,9,8,7,6,5\n\
r-100,,1,1,1,1,1\n";

    let response = router()
        .oneshot(
            Request::post("/api/v1/ratings/sheet")
                .header(header::CONTENT_TYPE, "text/csv")
                .body(Body::from(csv))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body[0]["review"], "ax-3000");
    assert_eq!(body[0]["outcome"]["classification"]["band"], "good");
    assert_eq!(body[1]["requested_profile"], "general");
    assert_eq!(body[1]["outcome"]["classification"]["band"], "weak");
}

#[tokio::test]
async fn sheet_route_rejects_sheets_without_review_column() {
    let response = router()
        .oneshot(
            Request::post("/api/v1/ratings/sheet")
                .body(Body::from("performance\n8\n"))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = read_json_body(response).await;
    assert!(body["error"]
        .as_str()
        .unwrap_or_default()
        .contains("'review' column"));
}

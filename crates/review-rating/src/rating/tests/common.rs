use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::config::RatingConfig;
use crate::rating::domain::ScoreVector;
use crate::rating::{rating_router, RatingEngine, RatingService};

pub(super) const EPSILON: f64 = 1e-9;

pub(super) const PROFILES: [&str; 4] = ["general", "gaming", "home", "business"];

pub(super) fn engine() -> RatingEngine {
    RatingEngine::standard()
}

/// Scores 9, 8, 7, 6, 5 across performance, stability, coverage, software, value.
pub(super) fn descending_scores() -> ScoreVector {
    ScoreVector::new()
        .with("performance", 9.0)
        .with("stability", 8.0)
        .with("coverage", 7.0)
        .with("software", 6.0)
        .with("value", 5.0)
}

pub(super) fn uniform_scores(value: f64) -> ScoreVector {
    ScoreVector::uniform(engine().criteria().list(), value)
}

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {expected}, got {actual}"
    );
}

pub(super) fn rating_service() -> Arc<RatingService> {
    Arc::new(RatingService::new(
        Arc::new(engine()),
        &RatingConfig::default(),
    ))
}

pub(super) fn router() -> axum::Router {
    rating_router(rating_service())
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

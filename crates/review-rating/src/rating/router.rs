use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::classification::Classification;
use super::domain::{clamp_score, ScoreVector};
use super::record::{CriterionBreakdown, ReviewScoreRecord};
use super::service::RatingService;
use super::sheet::{ScoreSheetImporter, ScoredReview};
use super::RatingOutcome;
use crate::error::AppError;

/// Router builder exposing the rating engine over HTTP.
pub fn rating_router(service: Arc<RatingService>) -> Router {
    Router::new()
        .route("/api/v1/ratings/criteria", get(criteria_handler))
        .route("/api/v1/ratings/profiles", get(profiles_handler))
        .route("/api/v1/ratings/compute", post(compute_handler))
        .route("/api/v1/ratings/classify", get(classify_handler))
        .route("/api/v1/ratings/sheet", post(score_sheet_handler))
        .with_state(service)
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ComputeRequest {
    pub scores: ScoreVector,
    #[serde(default)]
    pub profile: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputeResponse {
    pub computed_at: DateTime<Utc>,
    pub formatted_total: String,
    #[serde(flatten)]
    pub outcome: RatingOutcome,
    pub criteria: Vec<CriterionBreakdown>,
    pub record: ReviewScoreRecord,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClassifyQuery {
    pub total: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClassifyResponse {
    pub total: f64,
    pub classification: Classification,
}

pub(crate) async fn criteria_handler(State(service): State<Arc<RatingService>>) -> Response {
    (StatusCode::OK, Json(service.criteria())).into_response()
}

pub(crate) async fn profiles_handler(State(service): State<Arc<RatingService>>) -> Response {
    (StatusCode::OK, Json(service.profiles())).into_response()
}

pub(crate) async fn compute_handler(
    State(service): State<Arc<RatingService>>,
    Json(request): Json<ComputeRequest>,
) -> Response {
    let outcome = service.rate(&request.scores, request.profile.as_deref());
    let response = ComputeResponse {
        computed_at: Utc::now(),
        formatted_total: outcome.formatted_total(),
        criteria: outcome.criterion_breakdown(service.engine().criteria()),
        record: outcome.record(),
        outcome,
    };
    (StatusCode::OK, Json(response)).into_response()
}

pub(crate) async fn classify_handler(
    State(service): State<Arc<RatingService>>,
    Query(query): Query<ClassifyQuery>,
) -> Response {
    let total = clamp_score(query.total);
    let response = ClassifyResponse {
        total,
        classification: service.engine().classify(total),
    };
    (StatusCode::OK, Json(response)).into_response()
}

/// Scores a CSV body; rows without a profile use the service default.
pub(crate) async fn score_sheet_handler(
    State(service): State<Arc<RatingService>>,
    body: String,
) -> Result<Json<Vec<ScoredReview>>, AppError> {
    let reviews = ScoreSheetImporter::from_reader(
        body.as_bytes(),
        service.engine(),
        service.default_profile(),
    )?;
    Ok(Json(reviews))
}

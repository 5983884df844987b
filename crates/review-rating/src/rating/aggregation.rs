use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use super::diagnostics::RatingDiagnostic;
use super::domain::{clamp_score, Criterion, CriterionId, ScoreVector, MAX_SCORE, MIN_SCORE};
use super::weights::EffectiveWeights;

/// Output of one aggregation pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregationResult {
    pub total: f64,
    /// Clamped score used for every registered criterion.
    pub breakdown: BTreeMap<CriterionId, f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub diagnostics: Vec<RatingDiagnostic>,
}

impl AggregationResult {
    pub fn is_degenerate(&self) -> bool {
        self.diagnostics.iter().any(RatingDiagnostic::is_degenerate)
    }
}

/// Totals are snapped to nine decimal places before banding.
const TOTAL_STEPS_PER_POINT: f64 = 1e9;

/// Weighted-average aggregation over the registered criteria.
pub struct AggregationEngine;

impl AggregationEngine {
    /// Divides by the weight total, so the result is a true weighted average whatever the
    /// weights sum to. Never panics and never yields `NaN`.
    pub fn compute(
        criteria: &[Criterion],
        scores: &ScoreVector,
        weights: &EffectiveWeights,
    ) -> AggregationResult {
        let mut diagnostics = Vec::new();

        for (criterion, _) in scores.iter() {
            if !criteria.iter().any(|known| &known.id == criterion) {
                warn!(criterion = %criterion, "ignoring score for unknown criterion");
                diagnostics.push(RatingDiagnostic::UnknownCriterion {
                    criterion: criterion.clone(),
                });
            }
        }

        let mut breakdown = BTreeMap::new();
        let mut weighted_sum = 0.0;
        let mut total_weight = 0.0;

        for criterion in criteria {
            let raw = clamp_score(scores.get(criterion.id.as_str()).unwrap_or(MIN_SCORE));
            let weight = weights.get(criterion.id.as_str()).unwrap_or(0.0);

            weighted_sum += raw * weight;
            total_weight += weight;
            breakdown.insert(criterion.id.clone(), raw);
        }

        let average = weighted_sum / total_weight;
        let total = if total_weight > 0.0 && average.is_finite() {
            snap_total(average).clamp(MIN_SCORE, MAX_SCORE)
        } else {
            error!(total_weight, "degenerate rating weights, reporting a zero total");
            diagnostics.push(RatingDiagnostic::DegenerateConfiguration { total_weight });
            MIN_SCORE
        };

        AggregationResult {
            total,
            breakdown,
            diagnostics,
        }
    }
}

fn snap_total(average: f64) -> f64 {
    (average * TOTAL_STEPS_PER_POINT).round() / TOTAL_STEPS_PER_POINT
}

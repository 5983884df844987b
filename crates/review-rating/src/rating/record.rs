use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::classification::Band;
use super::domain::{Criterion, CriterionId};
use super::weights::EffectiveWeights;

/// Flat score fields stored on a review article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewScoreRecord {
    pub performance_score: f64,
    pub stability_score: f64,
    pub coverage_score: f64,
    pub software_score: f64,
    pub value_score: f64,
    pub total_score: f64,
    pub score_numeric: f64,
}

impl ReviewScoreRecord {
    pub fn from_breakdown(breakdown: &BTreeMap<CriterionId, f64>, total: f64) -> Self {
        let score = |id: &str| breakdown.get(id).copied().unwrap_or(0.0);
        Self {
            performance_score: score("performance"),
            stability_score: score("stability"),
            coverage_score: score("coverage"),
            software_score: score("software"),
            value_score: score("value"),
            total_score: total,
            score_numeric: total,
        }
    }
}

/// Per-criterion line for score cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionBreakdown {
    pub criterion: CriterionId,
    pub display_name: String,
    pub score: f64,
    pub weight: f64,
    pub weight_percent: u32,
    pub band: Band,
}

pub(crate) fn criterion_breakdown(
    criteria: &[Criterion],
    breakdown: &BTreeMap<CriterionId, f64>,
    weights: &EffectiveWeights,
) -> Vec<CriterionBreakdown> {
    criteria
        .iter()
        .map(|criterion| {
            let score = breakdown.get(&criterion.id).copied().unwrap_or(0.0);
            CriterionBreakdown {
                criterion: criterion.id.clone(),
                display_name: criterion.display_name.clone(),
                score,
                weight: weights.get(criterion.id.as_str()).unwrap_or(0.0),
                weight_percent: weights.percent(criterion.id.as_str()),
                band: Band::from_score(score),
            }
        })
        .collect()
}

/// One decimal, as shown on review cards.
pub fn format_score(score: f64) -> String {
    format!("{score:.1}")
}

use serde::{Deserialize, Serialize};

use super::domain::{CriterionId, ProfileId};

/// Non-fatal conditions observed while computing a rating.
///
/// None of these interrupt a recompute: each one degrades to a defined result and is
/// reported alongside it so callers and logs can surface authoring or input problems.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RatingDiagnostic {
    #[error("score for unknown criterion '{criterion}' was ignored")]
    UnknownCriterion { criterion: CriterionId },
    #[error("unknown profile '{requested}', falling back to '{fallback}'")]
    UnknownProfile {
        requested: String,
        fallback: ProfileId,
    },
    #[error("degenerate weight configuration: total weight {total_weight} is not a positive finite number")]
    DegenerateConfiguration { total_weight: f64 },
}

impl RatingDiagnostic {
    pub fn is_degenerate(&self) -> bool {
        matches!(self, RatingDiagnostic::DegenerateConfiguration { .. })
    }
}

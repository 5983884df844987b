//! Multi-criteria weighted rating engine.
//!
//! Raw per-criterion scores flow through profile resolution, weighted averaging, and
//! banding. Every step is synchronous and side-effect free apart from diagnostics logging;
//! the registries are built once and shared read-only.

mod aggregation;
mod classification;
pub mod controller;
mod diagnostics;
pub mod domain;
mod record;
mod registry;
pub mod router;
pub mod service;
pub mod sheet;
mod weights;

#[cfg(test)]
mod tests;

use std::collections::BTreeMap;
use std::sync::{Arc, OnceLock};

use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};

pub use aggregation::{AggregationEngine, AggregationResult};
pub use classification::{classify, Band, Classification};
pub use controller::{RatingChange, RatingUpdate, ReactiveController, ScorePreset};
pub use diagnostics::RatingDiagnostic;
pub use domain::{Criterion, CriterionId, Profile, ProfileId, ScoreVector};
pub use record::{format_score, CriterionBreakdown, ReviewScoreRecord};
pub use registry::{CriteriaRegistry, ProfileLookup, ProfileRegistry, RegistryError};
pub use router::rating_router;
pub use service::{ProfileView, RatingService};
pub use sheet::{ScoreSheetError, ScoreSheetImporter, ScoredReview};
pub use weights::{EffectiveWeights, WeightResolver, WeightSumDeviation};

/// Stateless facade over the criteria and profile registries.
#[derive(Debug, Clone, PartialEq)]
pub struct RatingEngine {
    criteria: CriteriaRegistry,
    profiles: ProfileRegistry,
}

impl RatingEngine {
    pub fn new(criteria: CriteriaRegistry, profiles: ProfileRegistry) -> Self {
        Self { criteria, profiles }
    }

    pub fn standard() -> Self {
        Self::new(CriteriaRegistry::standard(), ProfileRegistry::standard())
    }

    /// Standard registries, validated.
    pub fn try_standard() -> Result<Self, RegistryError> {
        let criteria = CriteriaRegistry::try_standard()?;
        let profiles = ProfileRegistry::try_standard(&criteria)?;
        Ok(Self::new(criteria, profiles))
    }

    /// Process-wide engine over the standard registries, validated on first use.
    pub fn shared() -> Arc<RatingEngine> {
        static ENGINE: OnceLock<Arc<RatingEngine>> = OnceLock::new();
        ENGINE
            .get_or_init(|| {
                let engine = Self::try_standard().unwrap_or_else(|err| {
                    error!(error = %err, "standard rating registries failed validation");
                    Self::standard()
                });
                Arc::new(engine)
            })
            .clone()
    }

    pub fn criteria(&self) -> &CriteriaRegistry {
        &self.criteria
    }

    pub fn profiles(&self) -> &ProfileRegistry {
        &self.profiles
    }

    pub fn effective_weights(&self, profile_id: &str) -> EffectiveWeights {
        WeightResolver::resolve(self.profiles.get(profile_id), self.criteria.list())
    }

    /// Resolve the profile, aggregate, and classify.
    pub fn compute_total(&self, scores: &ScoreVector, profile_id: &str) -> RatingOutcome {
        let lookup = self.profiles.lookup(profile_id);
        let weights = WeightResolver::resolve(lookup.profile, self.criteria.list());
        let AggregationResult {
            total,
            breakdown,
            diagnostics: aggregation_diagnostics,
        } = AggregationEngine::compute(self.criteria.list(), scores, &weights);

        let mut diagnostics = Vec::with_capacity(aggregation_diagnostics.len() + 1);
        if lookup.fell_back {
            diagnostics.push(RatingDiagnostic::UnknownProfile {
                requested: profile_id.to_string(),
                fallback: lookup.profile.id.clone(),
            });
        }
        diagnostics.extend(aggregation_diagnostics);

        let classification = classify(total);
        debug!(
            profile = %lookup.profile.id,
            total,
            band = ?classification.band,
            "rating recomputed"
        );

        RatingOutcome {
            profile: lookup.profile.id.clone(),
            weights,
            total,
            breakdown,
            classification,
            diagnostics,
        }
    }

    pub fn classify(&self, total: f64) -> Classification {
        classify(total)
    }

    /// Profiles whose effective weights sum further than `tolerance` from 1.
    pub fn unbalanced_profiles(&self, tolerance: f64) -> Vec<WeightSumDeviation> {
        self.profiles
            .list()
            .iter()
            .filter_map(|profile| {
                weights::weight_sum_deviation(profile, self.criteria.list(), tolerance)
            })
            .collect()
    }

    /// Log every unbalanced profile; weight sums are not a runtime invariant.
    pub fn audit_weight_sums(&self, tolerance: f64) -> Vec<WeightSumDeviation> {
        let deviations = self.unbalanced_profiles(tolerance);
        for deviation in &deviations {
            warn!(
                profile = %deviation.profile,
                weight_sum = deviation.weight_sum,
                tolerance,
                "profile weights do not sum to 1"
            );
        }
        deviations
    }
}

/// Everything derived from one `(scores, profile)` pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingOutcome {
    /// Profile actually applied, after any fallback.
    pub profile: ProfileId,
    pub weights: EffectiveWeights,
    pub total: f64,
    pub breakdown: BTreeMap<CriterionId, f64>,
    pub classification: Classification,
    #[serde(default)]
    pub diagnostics: Vec<RatingDiagnostic>,
}

impl RatingOutcome {
    pub fn record(&self) -> ReviewScoreRecord {
        ReviewScoreRecord::from_breakdown(&self.breakdown, self.total)
    }

    pub fn criterion_breakdown(&self, criteria: &CriteriaRegistry) -> Vec<CriterionBreakdown> {
        record::criterion_breakdown(criteria.list(), &self.breakdown, &self.weights)
    }

    pub fn formatted_total(&self) -> String {
        format_score(self.total)
    }
}

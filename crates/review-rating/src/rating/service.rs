use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::domain::{Criterion, ProfileId, ScoreVector};
use super::weights::EffectiveWeights;
use super::{RatingEngine, RatingOutcome};
use crate::config::RatingConfig;

/// Service binding the shared engine to the configured default profile.
pub struct RatingService {
    engine: Arc<RatingEngine>,
    default_profile: String,
}

impl RatingService {
    pub fn new(engine: Arc<RatingEngine>, config: &RatingConfig) -> Self {
        Self {
            engine,
            default_profile: config.default_profile.clone(),
        }
    }

    pub fn engine(&self) -> &RatingEngine {
        &self.engine
    }

    pub fn default_profile(&self) -> &str {
        &self.default_profile
    }

    /// Score with the requested profile, or the configured default when none is given.
    pub fn rate(&self, scores: &ScoreVector, profile: Option<&str>) -> RatingOutcome {
        let profile = profile.unwrap_or(&self.default_profile);
        self.engine.compute_total(scores, profile)
    }

    pub fn criteria(&self) -> Vec<Criterion> {
        self.engine.criteria().list().to_vec()
    }

    pub fn profiles(&self) -> Vec<ProfileView> {
        self.engine
            .profiles()
            .list()
            .iter()
            .map(|profile| {
                let weights = self.engine.effective_weights(profile.id.as_str());
                ProfileView {
                    id: profile.id.clone(),
                    display_name: profile.display_name.clone(),
                    weight_sum: weights.total(),
                    weights,
                }
            })
            .collect()
    }
}

/// Profile with its resolved weights, for selectors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileView {
    pub id: ProfileId,
    pub display_name: String,
    pub weights: EffectiveWeights,
    pub weight_sum: f64,
}

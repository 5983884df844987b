use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::classification::Classification;
use super::diagnostics::RatingDiagnostic;
use super::domain::{snap_to_step, CriterionId, ProfileId, ScoreVector, DEFAULT_SCORE};
use super::RatingEngine;

/// Quick-fill score sets offered next to the sliders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScorePreset {
    Reset,
    Medium,
    High,
}

impl ScorePreset {
    pub fn value(self) -> f64 {
        match self {
            ScorePreset::Reset => DEFAULT_SCORE,
            ScorePreset::Medium => 6.0,
            ScorePreset::High => 8.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScorePreset::Reset => "Sıfırla",
            ScorePreset::Medium => "Orta Puan",
            ScorePreset::High => "Yüksek Puan",
        }
    }
}

/// Mutation message delivered by an editing session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RatingChange {
    Scores { scores: ScoreVector },
    Score { criterion: CriterionId, value: f64 },
    Profile { profile: String },
    Preset { preset: ScorePreset },
}

/// Payload handed to the observer after every recompute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingUpdate {
    pub profile: ProfileId,
    pub total: f64,
    pub breakdown: BTreeMap<CriterionId, f64>,
    pub classification: Classification,
    #[serde(default)]
    pub diagnostics: Vec<RatingDiagnostic>,
}

/// Owns one session's scores and profile selection and recomputes on every change.
///
/// There is no loading or error state: construction computes the initial rating and each
/// `on_change` call recomputes synchronously before invoking the observer.
pub struct ReactiveController<F>
where
    F: FnMut(&RatingUpdate),
{
    engine: Arc<RatingEngine>,
    scores: ScoreVector,
    profile: String,
    observer: F,
    latest: RatingUpdate,
}

impl<F> ReactiveController<F>
where
    F: FnMut(&RatingUpdate),
{
    /// Starts from `initial` or, when absent, every criterion at the default score.
    pub fn new(
        engine: Arc<RatingEngine>,
        profile: impl Into<String>,
        initial: Option<ScoreVector>,
        observer: F,
    ) -> Self {
        let scores = initial
            .unwrap_or_else(|| ScoreVector::uniform(engine.criteria().list(), DEFAULT_SCORE));
        let profile = profile.into();
        let latest = recompute(&engine, &scores, &profile);

        let mut controller = Self {
            engine,
            scores,
            profile,
            observer,
            latest,
        };
        (controller.observer)(&controller.latest);
        controller
    }

    pub fn on_change(&mut self, change: RatingChange) -> &RatingUpdate {
        match change {
            RatingChange::Scores { scores } => self.scores = scores,
            RatingChange::Score { criterion, value } => {
                self.scores.set(criterion, snap_to_step(value));
            }
            RatingChange::Profile { profile } => self.profile = profile,
            RatingChange::Preset { preset } => {
                debug!(preset = preset.label(), "applying score preset");
                self.scores = ScoreVector::uniform(self.engine.criteria().list(), preset.value());
            }
        }

        self.latest = recompute(&self.engine, &self.scores, &self.profile);
        (self.observer)(&self.latest);
        &self.latest
    }

    pub fn scores(&self) -> &ScoreVector {
        &self.scores
    }

    /// Profile id as last requested, which may differ from the applied one.
    pub fn requested_profile(&self) -> &str {
        &self.profile
    }

    pub fn latest(&self) -> &RatingUpdate {
        &self.latest
    }
}

fn recompute(engine: &RatingEngine, scores: &ScoreVector, profile: &str) -> RatingUpdate {
    let outcome = engine.compute_total(scores, profile);
    RatingUpdate {
        profile: outcome.profile,
        total: outcome.total,
        breakdown: outcome.breakdown,
        classification: outcome.classification,
        diagnostics: outcome.diagnostics,
    }
}

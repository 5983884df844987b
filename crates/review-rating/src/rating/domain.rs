use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Lowest raw score a criterion can carry.
pub const MIN_SCORE: f64 = 0.0;
/// Highest raw score a criterion can carry.
pub const MAX_SCORE: f64 = 10.0;
/// Granularity of interactive score edits.
pub const SCORE_STEP: f64 = 0.1;
/// Score every criterion starts at in a fresh editing session.
pub const DEFAULT_SCORE: f64 = 5.0;

/// Identifier wrapper for a scored axis such as `performance`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CriterionId(pub String);

impl CriterionId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CriterionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for CriterionId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CriterionId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Identifier wrapper for a weighting profile such as `gaming`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileId(pub String);

impl ProfileId {
    pub const GENERAL: &'static str = "general";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn general() -> Self {
        Self(Self::GENERAL.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for ProfileId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ProfileId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// A single named axis being scored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Criterion {
    pub id: CriterionId,
    pub display_name: String,
    pub default_weight: f64,
    pub description: String,
}

impl Criterion {
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        default_weight: f64,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: CriterionId::new(id),
            display_name: display_name.into(),
            default_weight,
            description: description.into(),
        }
    }
}

/// Named set of weight overrides layered over the criterion defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: ProfileId,
    pub display_name: String,
    #[serde(default)]
    pub weight_overrides: BTreeMap<CriterionId, f64>,
}

impl Profile {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: ProfileId::new(id),
            display_name: display_name.into(),
            weight_overrides: BTreeMap::new(),
        }
    }

    pub fn with_override(mut self, criterion: impl Into<String>, weight: f64) -> Self {
        self.weight_overrides
            .insert(CriterionId::new(criterion), weight);
        self
    }

    pub fn is_general(&self) -> bool {
        self.id.as_str() == ProfileId::GENERAL
    }
}

/// Raw per-criterion scores supplied by the caller for one recompute.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoreVector(BTreeMap<CriterionId, f64>);

impl ScoreVector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every listed criterion set to the same value.
    pub fn uniform(criteria: &[Criterion], value: f64) -> Self {
        Self(
            criteria
                .iter()
                .map(|criterion| (criterion.id.clone(), value))
                .collect(),
        )
    }

    pub fn with(mut self, criterion: impl Into<String>, value: f64) -> Self {
        self.set(CriterionId::new(criterion), value);
        self
    }

    pub fn set(&mut self, criterion: CriterionId, value: f64) {
        self.0.insert(criterion, value);
    }

    pub fn get(&self, criterion: &str) -> Option<f64> {
        self.0.get(criterion).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CriterionId, f64)> {
        self.0.iter().map(|(id, value)| (id, *value))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for ScoreVector {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(id, value)| (CriterionId::new(id), value))
                .collect(),
        )
    }
}

/// Clamp a raw score into `[0, 10]`. `NaN` counts as an absent score.
pub fn clamp_score(value: f64) -> f64 {
    if value.is_nan() {
        MIN_SCORE
    } else {
        value.clamp(MIN_SCORE, MAX_SCORE)
    }
}

/// Round a score onto the interactive edit grid.
pub fn snap_to_step(value: f64) -> f64 {
    let steps_per_point = (1.0 / SCORE_STEP).round();
    (clamp_score(value) * steps_per_point).round() / steps_per_point
}

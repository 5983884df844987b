use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::domain::{Criterion, CriterionId, Profile, ProfileId};

/// Weight actually applied to each criterion under one profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EffectiveWeights(BTreeMap<CriterionId, f64>);

impl EffectiveWeights {
    pub fn get(&self, criterion: &str) -> Option<f64> {
        self.0.get(criterion).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CriterionId, f64)> {
        self.0.iter().map(|(id, weight)| (id, *weight))
    }

    pub fn total(&self) -> f64 {
        self.0.values().sum()
    }

    /// Same weights multiplied by `factor`.
    pub fn scaled(&self, factor: f64) -> Self {
        Self(
            self.0
                .iter()
                .map(|(id, weight)| (id.clone(), weight * factor))
                .collect(),
        )
    }

    /// Whole-number percentage shown next to each criterion.
    pub fn percent(&self, criterion: &str) -> u32 {
        self.get(criterion)
            .map(|weight| (weight * 100.0).round().max(0.0) as u32)
            .unwrap_or(0)
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for EffectiveWeights {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(id, weight)| (CriterionId::new(id), weight))
                .collect(),
        )
    }
}

/// Merges a profile's overrides with the criterion defaults.
pub struct WeightResolver;

impl WeightResolver {
    /// Override when present and positive, otherwise the criterion default. No renormalization.
    pub fn resolve(profile: &Profile, criteria: &[Criterion]) -> EffectiveWeights {
        EffectiveWeights(
            criteria
                .iter()
                .map(|criterion| {
                    let weight = profile
                        .weight_overrides
                        .get(&criterion.id)
                        .copied()
                        .filter(|weight| *weight > 0.0)
                        .unwrap_or(criterion.default_weight);
                    (criterion.id.clone(), weight)
                })
                .collect(),
        )
    }
}

/// A profile whose effective weights stray from summing to 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightSumDeviation {
    pub profile: ProfileId,
    pub weight_sum: f64,
}

pub(crate) fn weight_sum_deviation(
    profile: &Profile,
    criteria: &[Criterion],
    tolerance: f64,
) -> Option<WeightSumDeviation> {
    let weight_sum = WeightResolver::resolve(profile, criteria).total();
    ((weight_sum - 1.0).abs() > tolerance).then(|| WeightSumDeviation {
        profile: profile.id.clone(),
        weight_sum,
    })
}

use std::collections::HashSet;

use tracing::warn;

use super::domain::{Criterion, CriterionId, Profile, ProfileId};

/// Authoring problems detected while building a registry.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RegistryError {
    #[error("criteria registry must contain at least one criterion")]
    EmptyCriteria,
    #[error("criterion '{0}' is declared more than once")]
    DuplicateCriterion(CriterionId),
    #[error("criterion '{criterion}' has default weight {weight} outside (0, 1]")]
    InvalidDefaultWeight { criterion: CriterionId, weight: f64 },
    #[error("criterion '{0}' is not registered")]
    CriterionNotFound(String),
    #[error("profile '{0}' is declared more than once")]
    DuplicateProfile(ProfileId),
    #[error("profile registry must contain the '{}' profile", ProfileId::GENERAL)]
    MissingGeneralProfile,
    #[error("profile '{profile}' overrides unknown criterion '{criterion}'")]
    UnknownOverrideCriterion {
        profile: ProfileId,
        criterion: CriterionId,
    },
    #[error("profile '{profile}' gives '{criterion}' weight {weight} outside (0, 1]")]
    InvalidOverrideWeight {
        profile: ProfileId,
        criterion: CriterionId,
        weight: f64,
    },
}

fn is_valid_weight(weight: f64) -> bool {
    weight.is_finite() && weight > 0.0 && weight <= 1.0
}

/// Immutable catalogue of the axes a review is scored on.
#[derive(Debug, Clone, PartialEq)]
pub struct CriteriaRegistry {
    criteria: Vec<Criterion>,
}

impl CriteriaRegistry {
    pub fn new(criteria: Vec<Criterion>) -> Result<Self, RegistryError> {
        if criteria.is_empty() {
            return Err(RegistryError::EmptyCriteria);
        }

        let mut seen = HashSet::new();
        for criterion in &criteria {
            if !seen.insert(criterion.id.clone()) {
                return Err(RegistryError::DuplicateCriterion(criterion.id.clone()));
            }
            if !is_valid_weight(criterion.default_weight) {
                return Err(RegistryError::InvalidDefaultWeight {
                    criterion: criterion.id.clone(),
                    weight: criterion.default_weight,
                });
            }
        }

        Ok(Self { criteria })
    }

    /// The five hardware review criteria used across the site.
    pub fn standard() -> Self {
        Self {
            criteria: standard_criteria(),
        }
    }

    /// Standard criteria passed through [`CriteriaRegistry::new`].
    pub fn try_standard() -> Result<Self, RegistryError> {
        Self::new(standard_criteria())
    }

    pub fn list(&self) -> &[Criterion] {
        &self.criteria
    }

    pub fn get(&self, id: &str) -> Result<&Criterion, RegistryError> {
        self.criteria
            .iter()
            .find(|criterion| criterion.id.as_str() == id)
            .ok_or_else(|| RegistryError::CriterionNotFound(id.to_string()))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.criteria
            .iter()
            .any(|criterion| criterion.id.as_str() == id)
    }

    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }
}

/// Result of a lenient profile lookup.
#[derive(Debug, Clone, Copy)]
pub struct ProfileLookup<'a> {
    pub profile: &'a Profile,
    pub fell_back: bool,
}

/// Immutable catalogue of weighting profiles. Always contains `general`.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileRegistry {
    profiles: Vec<Profile>,
    general: usize,
}

impl ProfileRegistry {
    pub fn new(profiles: Vec<Profile>, criteria: &CriteriaRegistry) -> Result<Self, RegistryError> {
        let mut seen = HashSet::new();
        for profile in &profiles {
            if !seen.insert(profile.id.clone()) {
                return Err(RegistryError::DuplicateProfile(profile.id.clone()));
            }

            for (criterion, weight) in &profile.weight_overrides {
                if !criteria.contains(criterion.as_str()) {
                    return Err(RegistryError::UnknownOverrideCriterion {
                        profile: profile.id.clone(),
                        criterion: criterion.clone(),
                    });
                }
                if !is_valid_weight(*weight) {
                    return Err(RegistryError::InvalidOverrideWeight {
                        profile: profile.id.clone(),
                        criterion: criterion.clone(),
                        weight: *weight,
                    });
                }
            }
        }

        let general = profiles
            .iter()
            .position(Profile::is_general)
            .ok_or(RegistryError::MissingGeneralProfile)?;

        Ok(Self { profiles, general })
    }

    /// General, gaming, home and business profiles.
    pub fn standard() -> Self {
        let profiles = standard_profiles();
        let general = profiles
            .iter()
            .position(Profile::is_general)
            .unwrap_or_default();
        Self { profiles, general }
    }

    /// Standard profiles passed through [`ProfileRegistry::new`].
    pub fn try_standard(criteria: &CriteriaRegistry) -> Result<Self, RegistryError> {
        Self::new(standard_profiles(), criteria)
    }

    pub fn list(&self) -> &[Profile] {
        &self.profiles
    }

    pub fn general(&self) -> &Profile {
        &self.profiles[self.general]
    }

    /// Strict lookup.
    pub fn find(&self, id: &str) -> Option<&Profile> {
        self.profiles
            .iter()
            .find(|profile| profile.id.as_str() == id)
    }

    /// Lenient lookup: unknown ids resolve to `general` and are logged.
    pub fn lookup(&self, id: &str) -> ProfileLookup<'_> {
        match self.find(id) {
            Some(profile) => ProfileLookup {
                profile,
                fell_back: false,
            },
            None => {
                warn!(
                    requested = id,
                    fallback = ProfileId::GENERAL,
                    "unknown rating profile requested"
                );
                ProfileLookup {
                    profile: self.general(),
                    fell_back: true,
                }
            }
        }
    }

    pub fn get(&self, id: &str) -> &Profile {
        self.lookup(id).profile
    }
}

pub(crate) fn standard_criteria() -> Vec<Criterion> {
    vec![
        Criterion::new(
            "performance",
            "Performans",
            0.35,
            "Genel hız ve verimlilik",
        ),
        Criterion::new(
            "stability",
            "İstikrar & Ping",
            0.25,
            "Bağlantı güvenilirliği ve gecikme",
        ),
        Criterion::new(
            "coverage",
            "Kapsama & Çekim",
            0.20,
            "Sinyal gücü ve kapsama alanı",
        ),
        Criterion::new(
            "software",
            "Yazılım & Arayüz",
            0.10,
            "Kullanıcı arayüzü ve özellikler",
        ),
        Criterion::new("value", "Fiyat & Değer", 0.10, "Fiyat/performans oranı"),
    ]
}

pub(crate) fn standard_profiles() -> Vec<Profile> {
    vec![
        Profile::new(ProfileId::GENERAL, "Genel Kullanım"),
        Profile::new("gaming", "Oyun Profili")
            .with_override("stability", 0.40)
            .with_override("performance", 0.30)
            .with_override("coverage", 0.15)
            .with_override("software", 0.10)
            .with_override("value", 0.05),
        Profile::new("home", "Ev Kullanımı")
            .with_override("coverage", 0.35)
            .with_override("performance", 0.25)
            .with_override("stability", 0.20)
            .with_override("value", 0.15)
            .with_override("software", 0.05),
        Profile::new("business", "İş Profili")
            .with_override("stability", 0.40)
            .with_override("software", 0.25)
            .with_override("performance", 0.20)
            .with_override("coverage", 0.10)
            .with_override("value", 0.05),
    ]
}

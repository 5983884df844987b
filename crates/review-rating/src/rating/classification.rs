use serde::{Deserialize, Serialize};

/// Qualitative tier of a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Band {
    Weak,
    Medium,
    Good,
    Excellent,
}

impl Band {
    pub const ALL: [Band; 4] = [Band::Excellent, Band::Good, Band::Medium, Band::Weak];

    /// Inclusive lower bound of the band.
    pub fn lower_bound(self) -> f64 {
        match self {
            Band::Excellent => 8.5,
            Band::Good => 7.0,
            Band::Medium => 4.0,
            Band::Weak => 0.0,
        }
    }

    pub fn from_score(score: f64) -> Self {
        Self::ALL
            .into_iter()
            .find(|band| score >= band.lower_bound())
            .unwrap_or(Band::Weak)
    }

    pub fn label(self) -> &'static str {
        match self {
            Band::Excellent => "Mükemmel",
            Band::Good => "İyi",
            Band::Medium => "Orta",
            Band::Weak => "Zayıf",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Band::Excellent => "Bu ürün sektörde öncü konumda",
            Band::Good => "Güvenilir ve kaliteli bir seçim",
            Band::Medium => "Temel ihtiyaçları karşılar",
            Band::Weak => "Alternatif ürünleri değerlendirin",
        }
    }
}

/// Human-facing verdict for a total score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub band: Band,
    pub label: String,
    pub description: String,
}

impl From<Band> for Classification {
    fn from(band: Band) -> Self {
        Self {
            band,
            label: band.label().to_string(),
            description: band.description().to_string(),
        }
    }
}

/// Expects a total already clamped to `[0, 10]`; anything below 4 (including `NaN`) is weak.
pub fn classify(total: f64) -> Classification {
    Band::from_score(total).into()
}

use serde::{Deserialize, Serialize};

/// Signed treatment band. The five bands partition the impact range:
/// strong positive (+1.0), weak positive (+0.7..+0.9), neutral (0.0..±0.3),
/// weak negative (-0.3..-0.6), strong negative (-0.7..-1.0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TreatmentCategory {
    PositiveStrong,
    PositiveWeak,
    Neutral,
    NegativeWeak,
    NegativeStrong,
}

impl TreatmentCategory {
    pub fn is_negative(self) -> bool {
        matches!(self, Self::NegativeWeak | Self::NegativeStrong)
    }

    pub fn is_positive(self) -> bool {
        matches!(self, Self::PositiveWeak | Self::PositiveStrong)
    }
}

/// Canonical citation treatment. Closed taxonomy with a static impact
/// table: new treatment types require a table update here, not runtime
/// extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Treatment {
    Follows,
    Affirmed,
    Expanded,
    Explained,
    Harmonized,
    Cited,
    Discussed,
    Mentioned,
    Compared,
    Distinguished,
    Questioned,
    Limited,
    Criticized,
    Superseded,
    Overruled,
}

/// All canonical treatments, in taxonomy order.
pub const ALL_TREATMENTS: [Treatment; 15] = [
    Treatment::Follows,
    Treatment::Affirmed,
    Treatment::Expanded,
    Treatment::Explained,
    Treatment::Harmonized,
    Treatment::Cited,
    Treatment::Discussed,
    Treatment::Mentioned,
    Treatment::Compared,
    Treatment::Distinguished,
    Treatment::Questioned,
    Treatment::Limited,
    Treatment::Criticized,
    Treatment::Superseded,
    Treatment::Overruled,
];

impl Treatment {
    /// Signed impact in [-1.0, 1.0]. Values follow the treatment reference
    /// data of the upstream citation platform.
    pub fn impact(self) -> f64 {
        match self {
            Self::Follows | Self::Affirmed => 1.0,
            Self::Expanded => 0.9,
            Self::Explained => 0.8,
            Self::Harmonized => 0.7,
            Self::Cited => 0.0,
            Self::Discussed | Self::Compared => 0.2,
            Self::Mentioned => 0.1,
            Self::Distinguished => -0.3,
            Self::Questioned => -0.5,
            Self::Limited => -0.6,
            Self::Criticized => -0.7,
            Self::Superseded => -0.9,
            Self::Overruled => -1.0,
        }
    }

    /// Default strength in [0.0, 1.0], used when extraction supplies none.
    pub fn default_strength(self) -> f64 {
        match self {
            Self::Follows | Self::Affirmed | Self::Overruled => 1.0,
            Self::Expanded | Self::Superseded => 0.9,
            Self::Explained | Self::Criticized => 0.8,
            Self::Harmonized | Self::Questioned | Self::Limited => 0.7,
            Self::Distinguished => 0.6,
            Self::Cited | Self::Discussed => 0.5,
            Self::Compared => 0.4,
            Self::Mentioned => 0.3,
        }
    }

    /// Signed band this treatment falls in.
    pub fn category(self) -> TreatmentCategory {
        match self {
            Self::Follows | Self::Affirmed | Self::Expanded => TreatmentCategory::PositiveStrong,
            Self::Explained | Self::Harmonized => TreatmentCategory::PositiveWeak,
            Self::Cited | Self::Discussed | Self::Mentioned | Self::Compared => {
                TreatmentCategory::Neutral
            }
            Self::Distinguished | Self::Questioned | Self::Limited => {
                TreatmentCategory::NegativeWeak
            }
            Self::Criticized | Self::Superseded | Self::Overruled => {
                TreatmentCategory::NegativeStrong
            }
        }
    }

    /// Treatments that terminate a holding outright.
    pub fn is_overruling(self) -> bool {
        matches!(self, Self::Overruled | Self::Superseded)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Follows => "follows",
            Self::Affirmed => "affirmed",
            Self::Expanded => "expanded",
            Self::Explained => "explained",
            Self::Harmonized => "harmonized",
            Self::Cited => "cited",
            Self::Discussed => "discussed",
            Self::Mentioned => "mentioned",
            Self::Compared => "compared",
            Self::Distinguished => "distinguished",
            Self::Questioned => "questioned",
            Self::Limited => "limited",
            Self::Criticized => "criticized",
            Self::Superseded => "superseded",
            Self::Overruled => "overruled",
        }
    }

    pub fn from_str_name(s: &str) -> Option<Self> {
        ALL_TREATMENTS.iter().copied().find(|t| t.as_str() == s)
    }
}

use serde::{Deserialize, Serialize};

/// Court hierarchy level, from the top down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CourtLevel {
    SupremeCourt,
    Appellate,
    District,
    Trial,
    Administrative,
}

impl CourtLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SupremeCourt => "supreme_court",
            Self::Appellate => "appellate",
            Self::District => "district",
            Self::Trial => "trial",
            Self::Administrative => "administrative",
        }
    }

    pub fn from_str_name(s: &str) -> Option<Self> {
        match s {
            "supreme_court" => Some(Self::SupremeCourt),
            "appellate" => Some(Self::Appellate),
            "district" => Some(Self::District),
            "trial" => Some(Self::Trial),
            "administrative" => Some(Self::Administrative),
            _ => None,
        }
    }
}

/// Immutable court reference data. Queried, never computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Court {
    pub id: String,
    pub name: String,
    pub level: CourtLevel,
    /// Home jurisdiction code.
    pub jurisdiction: String,
    /// Base weight on a 0–10 scale (supreme 10.0, appellate 8.0, trial 5.0).
    pub base_authority_weight: f64,
    /// Jurisdictions where this court's rulings are mandatory authority.
    pub binding_jurisdictions: Vec<String>,
    /// Jurisdictions where this court's rulings are persuasive only.
    pub persuasive_jurisdictions: Vec<String>,
}

impl Court {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        level: CourtLevel,
        jurisdiction: impl Into<String>,
        base_authority_weight: f64,
    ) -> Self {
        let jurisdiction = jurisdiction.into();
        Self {
            id: id.into(),
            name: name.into(),
            level,
            binding_jurisdictions: vec![jurisdiction.clone()],
            persuasive_jurisdictions: Vec::new(),
            jurisdiction,
            base_authority_weight,
        }
    }

    /// Is this court's ruling binding in `jurisdiction`?
    pub fn binds(&self, jurisdiction: &str) -> bool {
        self.binding_jurisdictions.iter().any(|j| j == jurisdiction)
    }

    /// Is this court's ruling persuasive (but not binding) in `jurisdiction`?
    pub fn persuades(&self, jurisdiction: &str) -> bool {
        self.persuasive_jurisdictions
            .iter()
            .any(|j| j == jurisdiction)
    }
}

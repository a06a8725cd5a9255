use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Treatment, TreatmentCategory};

/// A directed, classified citation: citing case → cited case.
///
/// Both endpoints must already exist in the store — an edge referencing an
/// unknown case id is rejected at upsert, never auto-created. Multiple
/// edges may exist for the same (citing, cited) pair when extraction
/// produced conflicting treatments; downstream aggregation reconciles them
/// by weighted sum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CitationEdge {
    pub citing_id: String,
    pub cited_id: String,
    pub treatment: Treatment,
    /// Signed impact in [-1.0, 1.0], from the taxonomy table.
    pub impact: f64,
    /// How central the citation is to the citing opinion, [0.0, 1.0].
    pub strength: f64,
    /// Extraction certainty, [0.0, 1.0].
    pub certainty: f64,
    /// Whether the cited court binds the citing court's jurisdiction.
    pub binding: bool,
    /// Computed edge weight (lex-weight formula). 0.0 until calculated.
    pub weight: f64,
    /// Date the citing opinion issued — the temporal anchor for
    /// point-in-time queries, NOT ingestion time.
    pub created_on: NaiveDate,
}

impl CitationEdge {
    /// Build an edge from a classified treatment with taxonomy defaults.
    pub fn new(
        citing_id: impl Into<String>,
        cited_id: impl Into<String>,
        treatment: Treatment,
        created_on: NaiveDate,
    ) -> Self {
        Self {
            citing_id: citing_id.into(),
            cited_id: cited_id.into(),
            treatment,
            impact: treatment.impact(),
            strength: treatment.default_strength(),
            certainty: 1.0,
            binding: false,
            weight: 0.0,
            created_on,
        }
    }

    pub fn with_strength(mut self, strength: f64) -> Self {
        self.strength = strength.clamp(0.0, 1.0);
        self
    }

    pub fn with_certainty(mut self, certainty: f64) -> Self {
        self.certainty = certainty.clamp(0.0, 1.0);
        self
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    pub fn category(&self) -> TreatmentCategory {
        self.treatment.category()
    }

    /// A direct overruling edge strong enough to force `Overruled` status.
    pub fn is_authoritative_overrule(&self, certainty_floor: f64) -> bool {
        self.treatment.is_overruling() && self.certainty >= certainty_floor
    }
}

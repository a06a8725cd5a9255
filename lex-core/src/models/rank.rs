use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Query criteria for precedent ranking.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RankCriteria {
    /// Jurisdiction the query is being researched for.
    pub primary_jurisdiction: String,
    /// Jurisdictions treated as related (boost 1.0 rather than 0.8).
    pub related_jurisdictions: Vec<String>,
    /// Doctrine tags the matter involves.
    pub doctrine_tags: Vec<String>,
    /// Topical relevance per case id, [0.0, 1.0], supplied by the external
    /// semantic search collaborator. Cases absent from the map score 0.
    pub topical_relevance: HashMap<String, f64>,
    /// Include overruled/superseded authorities (historical research mode).
    pub include_overruled: bool,
    /// Maximum results to return. 0 means unlimited.
    pub limit: usize,
}

/// Per-factor breakdown of a final ranking score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub authority_score: f64,
    pub landmark_boost: f64,
    pub jurisdiction_boost: f64,
    pub practice_area_match: f64,
    pub topical_relevance: f64,
}

impl ScoreBreakdown {
    /// Multiplicative composition of all factors.
    pub fn final_score(&self) -> f64 {
        self.authority_score
            * self.landmark_boost
            * self.jurisdiction_boost
            * self.practice_area_match
            * self.topical_relevance
    }
}

/// One entry in a ranked precedent list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedPrecedent {
    pub case_id: String,
    pub final_score: f64,
    pub breakdown: ScoreBreakdown,
}

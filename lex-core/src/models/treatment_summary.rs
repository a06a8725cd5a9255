use serde::{Deserialize, Serialize};

/// Aggregate treatment counts for a case, as of a query date.
/// Mirrors the upstream platform's citation-treatment analysis output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TreatmentSummary {
    pub case_id: String,
    pub total_citations: usize,
    pub positive_citations: usize,
    pub negative_citations: usize,
    pub neutral_citations: usize,
    /// Authority-weighted sum of treatment impacts.
    pub weighted_authority_impact: f64,
}

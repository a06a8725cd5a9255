use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::case::{Confidence, ValidityStatus};
use crate::citation::Treatment;

/// One citing case's contribution to a validity determination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContributingCitation {
    pub citing_id: String,
    pub treatment: Treatment,
    /// impact × strength × citing court base weight × temporal factor.
    pub weighted_impact: f64,
}

/// Point-in-time determination of whether a case is still valid law.
///
/// Fully reproducible: the same graph state and `as_of` date always yield
/// the same record, because edge gathering filters strictly on the citing
/// opinion's issue date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidityRecord {
    pub case_id: String,
    pub status: ValidityStatus,
    pub confidence: Confidence,
    pub as_of: NaiveDate,
    /// Aggregate weighted impact over all gathered edges.
    pub weighted_impact: f64,
    /// Citing cases sorted by |weighted impact| descending.
    pub contributors: Vec<ContributingCitation>,
    /// Set when a mutual-overruling cycle was detected; the record is
    /// flagged for manual review instead of erroring.
    pub citation_conflict: bool,
    /// Set when the deadline or depth limit cut the traversal short.
    pub incomplete: bool,
}

impl ValidityRecord {
    /// Record for a case with no incoming citations as of the query date.
    pub fn unchallenged(case_id: impl Into<String>, as_of: NaiveDate) -> Self {
        Self {
            case_id: case_id.into(),
            status: ValidityStatus::GoodLaw,
            confidence: Confidence::new(1.0),
            as_of,
            weighted_impact: 0.0,
            contributors: Vec::new(),
            citation_conflict: false,
            incomplete: false,
        }
    }
}

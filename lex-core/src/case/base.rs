use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::Confidence;

/// Current legal status of a case's holding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidityStatus {
    /// Holding remains valid law.
    GoodLaw,
    /// Negative treatment casts doubt but no overruling.
    Questioned,
    /// Explicitly overturned by a later case.
    Overruled,
    /// Replaced by statute or rule.
    Superseded,
    /// Scope narrowed to specific facts.
    Limited,
}

impl ValidityStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::GoodLaw => "good_law",
            Self::Questioned => "questioned",
            Self::Overruled => "overruled",
            Self::Superseded => "superseded",
            Self::Limited => "limited",
        }
    }

    pub fn from_str_name(s: &str) -> Option<Self> {
        match s {
            "good_law" => Some(Self::GoodLaw),
            "questioned" => Some(Self::Questioned),
            "overruled" => Some(Self::Overruled),
            "superseded" => Some(Self::Superseded),
            "limited" => Some(Self::Limited),
            _ => None,
        }
    }

    /// Statuses that exclude a case from default precedent ranking.
    pub fn is_dead_law(self) -> bool {
        matches!(self, Self::Overruled | Self::Superseded)
    }
}

impl Default for ValidityStatus {
    fn default() -> Self {
        Self::GoodLaw
    }
}

/// A decided legal case — a node in the citation graph.
///
/// Score fields are mutated only by the authority scorer; status fields
/// only by the validity resolver. Cases are never deleted: re-ingesting
/// the same id with different content supersedes in place and bumps
/// `revision` (content-hash comparison decides).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Case {
    /// Stable key, e.g. "brown-v-board-1954".
    pub id: String,
    pub case_name: String,
    /// Court that decided the case.
    pub court_id: String,
    /// Jurisdiction code, e.g. "US", "US-9".
    pub jurisdiction: String,
    /// Date the opinion issued. Temporal anchor for all time-aware queries.
    pub decision_date: NaiveDate,
    /// Doctrine/practice-area tags, e.g. "equal_protection".
    pub doctrine_tags: Vec<String>,
    pub landmark: bool,
    /// Current legal status (maintained by the validity resolver).
    pub status: ValidityStatus,
    pub validity_confidence: Confidence,
    /// Authority score from the latest published snapshot.
    pub authority_score: f64,
    /// Version of the snapshot that produced `authority_score`.
    pub score_version: u64,
    /// blake3 hash of the ingested content, for supersede detection.
    pub content_hash: String,
    /// Bumped each time a re-ingestion with a differing hash supersedes.
    pub revision: u64,
    pub ingested_at: DateTime<Utc>,
}

impl Case {
    /// Build a new case with defaulted score/status fields.
    pub fn new(
        id: impl Into<String>,
        case_name: impl Into<String>,
        court_id: impl Into<String>,
        jurisdiction: impl Into<String>,
        decision_date: NaiveDate,
    ) -> Self {
        let case_name = case_name.into();
        let content_hash = content_hash(&case_name);
        Self {
            id: id.into(),
            case_name,
            court_id: court_id.into(),
            jurisdiction: jurisdiction.into(),
            decision_date,
            doctrine_tags: Vec::new(),
            landmark: false,
            status: ValidityStatus::default(),
            validity_confidence: Confidence::default(),
            authority_score: 0.0,
            score_version: 0,
            content_hash,
            revision: 0,
            ingested_at: Utc::now(),
        }
    }

    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.doctrine_tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn with_landmark(mut self, landmark: bool) -> Self {
        self.landmark = landmark;
        self
    }

    /// Recompute the content hash from the fields ingestion controls.
    pub fn recompute_content_hash(&mut self) {
        let payload = format!(
            "{}|{}|{}|{}|{}",
            self.case_name,
            self.court_id,
            self.jurisdiction,
            self.decision_date,
            self.doctrine_tags.join(","),
        );
        self.content_hash = content_hash(&payload);
    }
}

/// blake3 hex digest of arbitrary content.
pub(crate) fn content_hash(content: &str) -> String {
    blake3::hash(content.as_bytes()).to_hex().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_hash_changes_with_content() {
        let d = NaiveDate::from_ymd_opt(1954, 5, 17).unwrap();
        let mut a = Case::new("a", "Brown v. Board", "scotus", "US", d);
        let mut b = a.clone();
        a.recompute_content_hash();
        b.case_name = "Brown v. Board of Education".into();
        b.recompute_content_hash();
        assert_ne!(a.content_hash, b.content_hash);
    }

    #[test]
    fn dead_law_statuses() {
        assert!(ValidityStatus::Overruled.is_dead_law());
        assert!(ValidityStatus::Superseded.is_dead_law());
        assert!(!ValidityStatus::Questioned.is_dead_law());
    }
}

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Structured citation record produced by the upstream extraction pipeline.
/// Input to the treatment classifier; the raw descriptor may be anything
/// extraction emitted, including strings outside the canonical taxonomy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CitationRecord {
    pub citing_id: String,
    pub cited_id: String,
    /// Raw treatment label, e.g. "followed", "overruled by", "cf.".
    pub raw_treatment: String,
    /// Introductory signal phrase, if extraction captured one.
    pub signal_phrase: Option<String>,
    /// Length in characters of directly quoted text, 0 if none.
    pub quotation_len: usize,
    /// Date the citing opinion issued.
    pub created_on: NaiveDate,
}

impl CitationRecord {
    pub fn new(
        citing_id: impl Into<String>,
        cited_id: impl Into<String>,
        raw_treatment: impl Into<String>,
        created_on: NaiveDate,
    ) -> Self {
        Self {
            citing_id: citing_id.into(),
            cited_id: cited_id.into(),
            raw_treatment: raw_treatment.into(),
            signal_phrase: None,
            quotation_len: 0,
            created_on,
        }
    }

    pub fn with_signal_phrase(mut self, phrase: impl Into<String>) -> Self {
        self.signal_phrase = Some(phrase.into());
        self
    }

    pub fn with_quotation_len(mut self, len: usize) -> Self {
        self.quotation_len = len;
        self
    }
}

//! Descriptor → canonical treatment classification.

use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use lex_core::citation::{CitationEdge, Treatment};
use lex_core::constants::UNKNOWN_TREATMENT_CERTAINTY_CAP;
use lex_core::models::CitationRecord;

/// Result of classifying one raw descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedTreatment {
    pub treatment: Treatment,
    pub impact: f64,
    pub strength: f64,
    pub certainty: f64,
    /// False when the descriptor missed the taxonomy and fell back to
    /// the neutral default.
    pub recognized: bool,
}

/// Certainty for a descriptor that hit the taxonomy directly.
const RECOGNIZED_CERTAINTY: f64 = 0.8;
/// Certainty bonus when extraction captured a signal phrase.
const SIGNAL_PHRASE_BONUS: f64 = 0.1;
/// Strength bonus per 200 quoted characters, capped.
const QUOTATION_STRENGTH_CAP: f64 = 0.1;

fn normalizer() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^a-z' ]+").expect("static regex compiles"))
}

/// Lowercase, strip punctuation and collapse whitespace.
fn normalize(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    let stripped = normalizer().replace_all(&lowered, " ");
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Classify a raw citation record into a canonical treatment.
///
/// Never fails: an unrecognized descriptor maps to `cited` with certainty
/// capped at 0.3 so that ingestion stays non-blocking. Conflicting
/// descriptors for the same citing→cited pair are NOT merged here — each
/// record classifies independently and becomes its own edge; the validity
/// resolver reconciles by weighted sum.
pub fn classify(record: &CitationRecord) -> ClassifiedTreatment {
    let normalized = normalize(&record.raw_treatment);

    let (treatment, recognized) = match crate::synonyms::lookup(&normalized) {
        Some(t) => (t, true),
        None => {
            debug!(
                raw = %record.raw_treatment,
                citing = %record.citing_id,
                cited = %record.cited_id,
                "unrecognized treatment descriptor, defaulting to neutral"
            );
            (Treatment::Cited, false)
        }
    };

    let mut certainty = if recognized {
        RECOGNIZED_CERTAINTY
    } else {
        UNKNOWN_TREATMENT_CERTAINTY_CAP
    };
    if recognized && record.signal_phrase.is_some() {
        certainty += SIGNAL_PHRASE_BONUS;
    }

    // Long direct quotations mark a citation as load-bearing.
    let quote_bonus = ((record.quotation_len as f64) / 200.0 * 0.05).min(QUOTATION_STRENGTH_CAP);
    let strength = (treatment.default_strength() + quote_bonus).clamp(0.0, 1.0);

    ClassifiedTreatment {
        treatment,
        impact: treatment.impact(),
        strength,
        certainty: certainty.clamp(0.0, 1.0),
        recognized,
    }
}

impl ClassifiedTreatment {
    /// Build the (unweighted) citation edge for this classification.
    pub fn into_edge(self, record: &CitationRecord) -> CitationEdge {
        CitationEdge {
            citing_id: record.citing_id.clone(),
            cited_id: record.cited_id.clone(),
            treatment: self.treatment,
            impact: self.impact,
            strength: self.strength,
            certainty: self.certainty,
            binding: false,
            weight: 0.0,
            created_on: record.created_on,
        }
    }
}

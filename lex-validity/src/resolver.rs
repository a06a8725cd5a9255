use std::time::{Duration, Instant};

use chrono::{NaiveDate, Utc};
use tracing::{debug, info};

use lex_core::case::{Case, Confidence, ValidityStatus};
use lex_core::citation::{CitationEdge, Treatment, TreatmentCategory};
use lex_core::config::ResolverConfig;
use lex_core::errors::{LexResult, ResolveError, StoreError};
use lex_core::models::{ContributingCitation, ValidityRecord};
use lex_core::traits::GraphStore;
use lex_weight::factors::temporal;

use crate::chain::walk_overrule_chain;

/// Resolves whether a case was good law as of a given date.
pub struct ValidityResolver {
    config: ResolverConfig,
}

impl ValidityResolver {
    pub fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    /// Resolve `case_id` as of `as_of` (default: today).
    ///
    /// Timeouts and the chain depth cap produce a partial record with
    /// `incomplete = true`, never an error. A mutual-overruling cycle
    /// yields `Overruled` at confidence 0 with `citation_conflict` set.
    pub fn resolve(
        &self,
        store: &dyn GraphStore,
        case_id: &str,
        as_of: Option<NaiveDate>,
    ) -> LexResult<ValidityRecord> {
        let deadline = Instant::now() + Duration::from_millis(self.config.deadline_ms);

        let case = store
            .get_case(case_id)?
            .ok_or_else(|| StoreError::CaseNotFound {
                case_id: case_id.to_string(),
            })?;

        let as_of = as_of.unwrap_or_else(|| Utc::now().date_naive());
        if as_of < case.decision_date {
            return Err(ResolveError::InvalidAsOf {
                reason: format!(
                    "{as_of} predates the decision date {} of {case_id}",
                    case.decision_date
                ),
            }
            .into());
        }

        let edges = store.get_incoming_edges(case_id, Some(as_of))?;
        if edges.is_empty() {
            debug!(case_id, %as_of, "no citations, unchallenged");
            return Ok(ValidityRecord::unchallenged(case_id, as_of));
        }

        let mut contributors = Vec::with_capacity(edges.len());
        let mut weighted_impact = 0.0;
        let mut direct_overrule: Option<&CitationEdge> = None;
        let mut incomplete = false;

        for edge in &edges {
            if Instant::now() >= deadline {
                incomplete = true;
                break;
            }
            let weighted = self.weigh(store, edge, &case, as_of)?;
            weighted_impact += weighted;
            contributors.push(ContributingCitation {
                citing_id: edge.citing_id.clone(),
                treatment: edge.treatment,
                weighted_impact: weighted,
            });

            if edge.is_authoritative_overrule(self.config.overrule_certainty_floor) {
                // Latest, then most certain, overruler decides the status.
                let better = match direct_overrule {
                    None => true,
                    Some(prev) => {
                        (edge.created_on, edge.certainty) > (prev.created_on, prev.certainty)
                    }
                };
                if better {
                    direct_overrule = Some(edge);
                }
            }
        }

        let chain = walk_overrule_chain(store, case_id, as_of, &self.config, deadline)?;
        incomplete |= chain.truncated;

        contributors.sort_by(|a, b| {
            b.weighted_impact
                .abs()
                .partial_cmp(&a.weighted_impact.abs())
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.citing_id.cmp(&b.citing_id))
        });

        if chain.cycle {
            info!(case_id, %as_of, "overruling cycle, flagged as conflict");
            return Ok(ValidityRecord {
                case_id: case_id.to_string(),
                status: ValidityStatus::Overruled,
                confidence: Confidence::new(0.0),
                as_of,
                weighted_impact,
                contributors,
                citation_conflict: true,
                incomplete,
            });
        }

        let status = self.classify(weighted_impact, direct_overrule, &edges);
        // An explicit overruling speaks for itself: its extraction
        // certainty is the confidence, however the earlier citations lean.
        let confidence = match direct_overrule {
            Some(edge) => Confidence::new(edge.certainty),
            None => agreement_confidence(status, &edges),
        };

        debug!(
            case_id,
            %as_of,
            ?status,
            weighted_impact,
            citations = edges.len(),
            "validity resolved"
        );

        Ok(ValidityRecord {
            case_id: case_id.to_string(),
            status,
            confidence,
            as_of,
            weighted_impact,
            contributors,
            citation_conflict: false,
            incomplete,
        })
    }

    /// Resolve and persist the outcome onto the case row.
    pub fn resolve_and_record(
        &self,
        store: &dyn GraphStore,
        case_id: &str,
        as_of: Option<NaiveDate>,
    ) -> LexResult<ValidityRecord> {
        let record = self.resolve(store, case_id, as_of)?;
        store.update_status(case_id, record.status, record.confidence)?;
        Ok(record)
    }

    /// impact × strength × citing court base weight × temporal factor.
    fn weigh(
        &self,
        store: &dyn GraphStore,
        edge: &CitationEdge,
        cited: &Case,
        as_of: NaiveDate,
    ) -> LexResult<f64> {
        let citing = store
            .get_case(&edge.citing_id)?
            .ok_or_else(|| StoreError::CaseNotFound {
                case_id: edge.citing_id.clone(),
            })?;
        let court =
            store
                .get_court(&citing.court_id)?
                .ok_or_else(|| ResolveError::MissingCitingCourt {
                    court_id: citing.court_id.clone(),
                    citing_id: edge.citing_id.clone(),
                    cited_id: edge.cited_id.clone(),
                })?;

        let temporal = temporal::calculate(cited.decision_date, as_of);
        Ok(edge.impact * edge.strength * court.base_authority_weight * temporal)
    }

    fn classify(
        &self,
        weighted_impact: f64,
        direct_overrule: Option<&CitationEdge>,
        edges: &[CitationEdge],
    ) -> ValidityStatus {
        if let Some(edge) = direct_overrule {
            return if edge.treatment == Treatment::Superseded {
                ValidityStatus::Superseded
            } else {
                ValidityStatus::Overruled
            };
        }
        if weighted_impact <= self.config.overrule_threshold {
            return ValidityStatus::Overruled;
        }
        if weighted_impact <= self.config.question_threshold {
            return ValidityStatus::Questioned;
        }

        // Near zero: limited when something negative-weak chips at the
        // holding and nothing positive backs it.
        let band = self.config.question_threshold.abs();
        let any_negative_weak = edges
            .iter()
            .any(|e| e.category() == TreatmentCategory::NegativeWeak);
        let any_positive = edges.iter().any(|e| e.category().is_positive());
        if weighted_impact.abs() < band && any_negative_weak && !any_positive {
            return ValidityStatus::Limited;
        }

        ValidityStatus::GoodLaw
    }
}

/// Certainty-weighted fraction of citing cases agreeing with the outcome.
fn agreement_confidence(status: ValidityStatus, edges: &[CitationEdge]) -> Confidence {
    let total: f64 = edges.iter().map(|e| e.certainty).sum();
    if total <= 0.0 {
        return Confidence::new(0.0);
    }
    let negative_outcome = !matches!(status, ValidityStatus::GoodLaw);
    let agreeing: f64 = edges
        .iter()
        .filter(|e| e.category().is_negative() == negative_outcome)
        .map(|e| e.certainty)
        .sum();
    Confidence::new(agreeing / total)
}

use std::cmp::Ordering;
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use lex_core::config::RankerConfig;
use lex_core::errors::{LexResult, RankError};
use lex_core::models::{AuthoritySnapshot, RankCriteria, RankedPrecedent, ScoreBreakdown};
use lex_core::traits::GraphStore;

use crate::boosts;

/// A ranked result list. `complete` is false when the query deadline cut
/// candidate evaluation short; what was scored in time is still returned,
/// fully ordered.
#[derive(Debug, Clone)]
pub struct RankOutcome {
    pub precedents: Vec<RankedPrecedent>,
    pub complete: bool,
}

/// Ranks cases for a research query against a published snapshot.
pub struct PrecedentRanker {
    config: RankerConfig,
}

impl PrecedentRanker {
    pub fn new(config: RankerConfig) -> Self {
        Self { config }
    }

    /// Score every case in the snapshot against `criteria`.
    ///
    /// Overruled and superseded authorities are excluded unless
    /// `include_overruled` (historical research mode). Ties break by
    /// final score, then raw authority, then case id, so the order is
    /// total and reproducible.
    pub fn rank(
        &self,
        store: &dyn GraphStore,
        snapshot: &AuthoritySnapshot,
        criteria: &RankCriteria,
    ) -> LexResult<RankOutcome> {
        if criteria.primary_jurisdiction.is_empty() {
            return Err(RankError::InvalidCriteria {
                reason: "primary_jurisdiction must be set".to_string(),
            }
            .into());
        }
        if snapshot.is_empty() {
            return Err(RankError::NoSnapshot.into());
        }

        let deadline = Instant::now() + Duration::from_millis(self.config.deadline_ms);
        let mut complete = true;
        let mut results = Vec::new();

        for (case_id, authority_score) in &snapshot.scores {
            if Instant::now() >= deadline {
                warn!(
                    scored = results.len(),
                    total = snapshot.len(),
                    "ranking deadline hit, returning partial list"
                );
                complete = false;
                break;
            }

            // Cases in the snapshot but since deleted are skipped.
            let Some(case) = store.get_case(case_id)? else {
                continue;
            };
            if case.status.is_dead_law() && !criteria.include_overruled {
                continue;
            }

            let breakdown = ScoreBreakdown {
                authority_score: *authority_score,
                landmark_boost: boosts::landmark(&case, &self.config),
                jurisdiction_boost: boosts::jurisdiction(&case, criteria, &self.config),
                practice_area_match: boosts::practice_area(&case, criteria, &self.config),
                topical_relevance: boosts::topical(case_id, criteria),
            };
            results.push(RankedPrecedent {
                case_id: case_id.clone(),
                final_score: breakdown.final_score(),
                breakdown,
            });
        }

        results.sort_by(|a, b| {
            b.final_score
                .partial_cmp(&a.final_score)
                .unwrap_or(Ordering::Equal)
                .then_with(|| {
                    b.breakdown
                        .authority_score
                        .partial_cmp(&a.breakdown.authority_score)
                        .unwrap_or(Ordering::Equal)
                })
                .then_with(|| a.case_id.cmp(&b.case_id))
        });

        if criteria.limit > 0 {
            results.truncate(criteria.limit);
        }

        debug!(
            results = results.len(),
            complete,
            jurisdiction = %criteria.primary_jurisdiction,
            "ranking finished"
        );
        Ok(RankOutcome {
            precedents: results,
            complete,
        })
    }
}

use chrono::{NaiveDate, Utc};

use lex_core::errors::{LexResult, StoreError};
use lex_core::models::TreatmentSummary;
use lex_core::traits::GraphStore;
use lex_weight::factors::temporal;

/// Aggregate treatment counts and authority-weighted impact for a case,
/// over citations visible as of the query date.
pub fn summarize_treatment(
    store: &dyn GraphStore,
    case_id: &str,
    as_of: Option<NaiveDate>,
) -> LexResult<TreatmentSummary> {
    let case = store
        .get_case(case_id)?
        .ok_or_else(|| StoreError::CaseNotFound {
            case_id: case_id.to_string(),
        })?;
    let as_of = as_of.unwrap_or_else(|| Utc::now().date_naive());

    let mut summary = TreatmentSummary {
        case_id: case_id.to_string(),
        ..TreatmentSummary::default()
    };

    for edge in store.get_incoming_edges(case_id, Some(as_of))? {
        summary.total_citations += 1;
        let category = edge.category();
        if category.is_positive() {
            summary.positive_citations += 1;
        } else if category.is_negative() {
            summary.negative_citations += 1;
        } else {
            summary.neutral_citations += 1;
        }

        let weight = match store.get_case(&edge.citing_id)? {
            Some(citing) => store
                .get_court(&citing.court_id)?
                .map(|c| c.base_authority_weight)
                .unwrap_or(0.0),
            None => 0.0,
        };
        let temporal = temporal::calculate(case.decision_date, as_of);
        summary.weighted_authority_impact += edge.impact * edge.strength * weight * temporal;
    }

    Ok(summary)
}

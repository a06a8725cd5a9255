use chrono::NaiveDate;
use lex_core::case::Court;
use lex_core::citation::CitationEdge;

use crate::factors;

/// Multi-factor signed edge weight.
///
/// ```text
/// weight = baseAuthorityWeight
///   × jurisdictional
///   × temporal
///   × hierarchical
///   × strength
///   × sign(impact)
/// ```
///
/// The sign comes from the treatment's impact, so negative treatments
/// produce negative weights. A neutral treatment (impact 0.0) yields a
/// weight of exactly 0.0.
pub fn compute(
    edge: &CitationEdge,
    citing_court: &Court,
    cited_court: &Court,
    cited_decision_date: NaiveDate,
    as_of: NaiveDate,
) -> f64 {
    let base = cited_court.base_authority_weight;

    let jurisdictional = factors::jurisdictional::calculate(citing_court, cited_court);
    let temporal = factors::temporal::calculate(cited_decision_date, as_of);
    let hierarchical = factors::hierarchical::calculate(citing_court.level, cited_court.level);

    let sign = if edge.impact == 0.0 {
        0.0
    } else {
        edge.impact.signum()
    };

    base * jurisdictional * temporal * hierarchical * edge.strength * sign
}

/// Each factor individually, for debugging/observability.
#[derive(Debug, Clone)]
pub struct WeightBreakdown {
    pub base_authority_weight: f64,
    pub jurisdictional: f64,
    pub temporal: f64,
    pub hierarchical: f64,
    pub strength: f64,
    pub sign: f64,
    pub final_weight: f64,
}

/// Compute the weight with a full breakdown of each factor.
pub fn compute_breakdown(
    edge: &CitationEdge,
    citing_court: &Court,
    cited_court: &Court,
    cited_decision_date: NaiveDate,
    as_of: NaiveDate,
) -> WeightBreakdown {
    let base = cited_court.base_authority_weight;
    let jurisdictional = factors::jurisdictional::calculate(citing_court, cited_court);
    let temporal = factors::temporal::calculate(cited_decision_date, as_of);
    let hierarchical = factors::hierarchical::calculate(citing_court.level, cited_court.level);
    let sign = if edge.impact == 0.0 {
        0.0
    } else {
        edge.impact.signum()
    };

    let final_weight = base * jurisdictional * temporal * hierarchical * edge.strength * sign;

    WeightBreakdown {
        base_authority_weight: base,
        jurisdictional,
        temporal,
        hierarchical,
        strength: edge.strength,
        sign,
        final_weight,
    }
}

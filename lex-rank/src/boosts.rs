use lex_core::case::Case;
use lex_core::config::RankerConfig;
use lex_core::models::RankCriteria;

/// Landmark cases get a flat multiplier, everything else 1.0.
pub(crate) fn landmark(case: &Case, config: &RankerConfig) -> f64 {
    if case.landmark {
        config.landmark_boost
    } else {
        1.0
    }
}

/// Primary jurisdiction > related > everything else.
pub(crate) fn jurisdiction(case: &Case, criteria: &RankCriteria, config: &RankerConfig) -> f64 {
    if case.jurisdiction == criteria.primary_jurisdiction {
        config.primary_jurisdiction_boost
    } else if criteria
        .related_jurisdictions
        .iter()
        .any(|j| *j == case.jurisdiction)
    {
        config.related_jurisdiction_boost
    } else {
        config.other_jurisdiction_factor
    }
}

/// Boost when enough doctrine tags overlap with the query.
pub(crate) fn practice_area(case: &Case, criteria: &RankCriteria, config: &RankerConfig) -> f64 {
    let overlap = case
        .doctrine_tags
        .iter()
        .filter(|t| criteria.doctrine_tags.contains(t))
        .count();
    if overlap >= config.practice_area_overlap_min {
        config.practice_area_boost
    } else {
        1.0
    }
}

/// External semantic-relevance signal for this case, clamped to [0, 1].
///
/// An empty map means no semantic collaborator supplied a signal for the
/// query, so every case passes through at full weight. A populated map is
/// authoritative: absent cases score zero.
pub(crate) fn topical(case_id: &str, criteria: &RankCriteria) -> f64 {
    if criteria.topical_relevance.is_empty() {
        return 1.0;
    }
    criteria
        .topical_relevance
        .get(case_id)
        .copied()
        .unwrap_or(0.0)
        .clamp(0.0, 1.0)
}

use lex_core::case::CourtLevel;

/// Hierarchical factor between citing and cited court levels.
///
/// A cited supreme court carries full weight everywhere; an appellate
/// court cited by a lower court carries 0.9; peers carry 0.7; anything
/// else (citing upward-cited material, administrative bodies) 0.5.
pub fn calculate(citing_level: CourtLevel, cited_level: CourtLevel) -> f64 {
    use CourtLevel::*;
    match (citing_level, cited_level) {
        (_, SupremeCourt) => 1.0,
        (District | Trial, Appellate) => 0.9,
        (a, b) if a == b => 0.7,
        _ => 0.5,
    }
}

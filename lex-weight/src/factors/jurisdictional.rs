use lex_core::case::Court;

/// Binding precedent: full weight.
pub const BINDING: f64 = 1.0;
/// Persuasive authority: reduced weight.
pub const PERSUASIVE: f64 = 0.6;
/// No jurisdictional relationship.
pub const FOREIGN: f64 = 0.3;

/// Jurisdictional factor between the citing and cited courts.
///
/// 1.0 when the cited court binds the citing court's jurisdiction,
/// 0.6 when merely persuasive there, 0.3 otherwise.
pub fn calculate(citing_court: &Court, cited_court: &Court) -> f64 {
    if cited_court.binds(&citing_court.jurisdiction) {
        BINDING
    } else if cited_court.persuades(&citing_court.jurisdiction) {
        PERSUASIVE
    } else {
        FOREIGN
    }
}

/// Whether the cited court is mandatory authority for the citing court.
pub fn is_binding(citing_court: &Court, cited_court: &Court) -> bool {
    cited_court.binds(&citing_court.jurisdiction)
}

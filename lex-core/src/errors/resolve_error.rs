/// Validity-resolver errors.
///
/// Timeouts and depth limits do NOT surface here — the resolver returns a
/// partial `ValidityRecord` with `incomplete = true`. Overruling cycles are
/// flagged on the record, not raised.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("invalid as-of date: {reason}")]
    InvalidAsOf { reason: String },

    #[error("citing court {court_id} missing for edge {citing_id} -> {cited_id}")]
    MissingCitingCourt {
        court_id: String,
        citing_id: String,
        cited_id: String,
    },
}

/// Precedent-ranker errors.
#[derive(Debug, thiserror::Error)]
pub enum RankError {
    #[error("no authority snapshot published yet")]
    NoSnapshot,

    #[error("invalid criteria: {reason}")]
    InvalidCriteria { reason: String },
}

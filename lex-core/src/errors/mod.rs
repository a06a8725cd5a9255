//! Typed error hierarchy. One enum per subsystem, aggregated into `LexError`.

mod rank_error;
mod resolve_error;
mod score_error;
mod store_error;

pub use rank_error::RankError;
pub use resolve_error::ResolveError;
pub use score_error::ScoreError;
pub use store_error::StoreError;

/// Top-level error for the lexgraph engine.
#[derive(Debug, thiserror::Error)]
pub enum LexError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Score(#[from] ScoreError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Rank(#[from] RankError),

    #[error("config error: {0}")]
    Config(String),
}

/// Convenience alias used across the workspace.
pub type LexResult<T> = Result<T, LexError>;

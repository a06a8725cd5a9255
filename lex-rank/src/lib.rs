//! # lex-rank
//!
//! Precedent ranker. Composes published authority scores with
//! research-context boosts (landmark status, jurisdiction fit, practice
//! area overlap, external topical relevance) into a deterministic,
//! fully-ordered result list. Also traces how doctrines evolve through
//! chains of positive citations from landmark cases.

mod boosts;
mod evolution;
mod ranker;

pub use evolution::{trace_doctrine_evolution, DoctrineEvolution, DoctrineStability};
pub use ranker::{PrecedentRanker, RankOutcome};

//! # lex-authority
//!
//! Authority scorer for the citation graph. Loads a consistent in-memory
//! snapshot of the graph, runs a damped fixed-point propagation over the
//! signed edge weights, and produces a versioned, immutable
//! [`AuthoritySnapshot`](lex_core::models::AuthoritySnapshot).
//!
//! Node iteration order is fixed (sorted by case id) so floating-point
//! summation order, and therefore the exact output, is reproducible across
//! runs on identical input.

mod graph;
mod pagerank;
mod scorer;

pub use graph::CitationGraph;
pub use pagerank::{run_pagerank, PageRankOutcome};
pub use scorer::{AuthorityScorer, ScorerPhase};

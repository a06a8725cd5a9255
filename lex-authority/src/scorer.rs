use std::sync::atomic::AtomicBool;

use chrono::Utc;
use tracing::{info, warn};

use lex_core::config::ScorerConfig;
use lex_core::errors::{LexError, LexResult};
use lex_core::models::AuthoritySnapshot;
use lex_core::traits::GraphStore;

use crate::graph::CitationGraph;
use crate::pagerank::run_pagerank;

/// Scoring pass lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScorerPhase {
    Idle,
    Computing,
    Converged,
    IterationLimitReached,
    Published,
}

/// Runs one full scoring pass: load a consistent graph view, iterate to a
/// fixed point, persist per-case scores, and return the snapshot for
/// atomic publication by the caller.
pub struct AuthorityScorer {
    config: ScorerConfig,
    phase: ScorerPhase,
}

impl AuthorityScorer {
    pub fn new(config: ScorerConfig) -> Self {
        Self {
            config,
            phase: ScorerPhase::Idle,
        }
    }

    pub fn phase(&self) -> ScorerPhase {
        self.phase
    }

    /// Compute a snapshot at `version`. The snapshot is built fully off
    /// the live read path; hitting the iteration cap still publishes,
    /// with `converged = false` as a soft warning.
    pub fn compute(
        &mut self,
        store: &dyn GraphStore,
        version: u64,
        cancel: &AtomicBool,
    ) -> LexResult<AuthoritySnapshot> {
        self.phase = ScorerPhase::Computing;

        let graph = CitationGraph::load(store)?;
        info!(
            version,
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "scoring pass started"
        );

        let outcome = run_pagerank(&graph, &self.config, cancel).map_err(LexError::Score)?;

        self.phase = if outcome.converged {
            ScorerPhase::Converged
        } else {
            warn!(
                version,
                iterations = outcome.iterations,
                "iteration cap hit before tolerance, publishing unconverged"
            );
            ScorerPhase::IterationLimitReached
        };

        for (case_id, score) in &outcome.scores {
            store.update_score(case_id, *score, version)?;
        }

        let snapshot = AuthoritySnapshot {
            version,
            scores: outcome.scores,
            iterations: outcome.iterations,
            converged: outcome.converged,
            computed_at: Utc::now(),
        };

        self.phase = ScorerPhase::Published;
        info!(
            version,
            cases = snapshot.len(),
            iterations = snapshot.iterations,
            converged = snapshot.converged,
            "snapshot published"
        );
        Ok(snapshot)
    }
}

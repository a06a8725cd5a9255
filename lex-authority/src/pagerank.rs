use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};

use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use rayon::prelude::*;
use tracing::{debug, info};

use lex_core::config::ScorerConfig;
use lex_core::errors::ScoreError;

use crate::graph::CitationGraph;

/// Result of a fixed-point run. Scores are keyed by case id; `converged`
/// is false when the iteration cap was hit before the tolerance was met.
#[derive(Debug, Clone)]
pub struct PageRankOutcome {
    pub scores: BTreeMap<String, f64>,
    pub iterations: usize,
    pub converged: bool,
}

/// Damped fixed-point propagation over signed edge weights.
///
/// ```text
/// score[n] = (1 - d) / N + d × Σ_{m → n} score[m] × weight(m→n) / outflow(m)
/// ```
///
/// `outflow(m)` sums the absolute outgoing weights of `m`, keeping the
/// transition sub-stochastic while negative treatments still subtract
/// from their target. Damping < 1 guarantees convergence regardless of
/// citation cycles, so loops need no special-casing.
///
/// Parallelism is across nodes within one iteration; each node's incoming
/// edges are summed in a fixed order, so the output is deterministic.
/// `cancel` is checked between iterations.
pub fn run_pagerank(
    graph: &CitationGraph,
    config: &ScorerConfig,
    cancel: &AtomicBool,
) -> Result<PageRankOutcome, ScoreError> {
    let g = graph.inner();
    let n = g.node_count();
    if n == 0 {
        return Err(ScoreError::EmptyGraph);
    }

    let damping = config.damping;
    let base = (1.0 - damping) / n as f64;

    // Outflow normalization over absolute weights.
    let outflow: Vec<f64> = (0..n)
        .map(|i| {
            g.edges_directed(NodeIndex::new(i), Direction::Outgoing)
                .map(|e| e.weight().abs())
                .sum()
        })
        .collect();

    let mut scores = vec![1.0 / n as f64; n];
    let mut iterations = 0usize;
    let mut converged = false;

    while iterations < config.max_iterations {
        if cancel.load(Ordering::Relaxed) {
            info!(iterations, "scoring pass cancelled");
            return Err(ScoreError::Cancelled { iterations });
        }

        let next: Vec<f64> = (0..n)
            .into_par_iter()
            .map(|i| {
                let inbound: f64 = g
                    .edges_directed(NodeIndex::new(i), Direction::Incoming)
                    .map(|e| {
                        let m = e.source().index();
                        if outflow[m] > 0.0 {
                            scores[m] * e.weight() / outflow[m]
                        } else {
                            0.0
                        }
                    })
                    .sum();
                // Net-negative citation pressure floors at zero authority.
                (base + damping * inbound).max(0.0)
            })
            .collect();

        let delta = next
            .iter()
            .zip(&scores)
            .map(|(a, b)| (a - b).abs())
            .fold(0.0f64, f64::max);

        scores = next;
        iterations += 1;

        if delta < config.tolerance {
            converged = true;
            break;
        }
    }

    debug!(iterations, converged, nodes = n, "fixed-point run finished");

    let scores = graph
        .case_ids()
        .zip(scores)
        .map(|(id, s)| (id.to_string(), s))
        .collect();

    Ok(PageRankOutcome {
        scores,
        iterations,
        converged,
    })
}

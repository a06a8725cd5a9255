use std::collections::HashSet;
use std::time::Instant;

use chrono::NaiveDate;
use tracing::warn;

use lex_core::config::ResolverConfig;
use lex_core::errors::LexResult;
use lex_core::traits::GraphStore;

/// Outcome of the overruling-chain traversal.
#[derive(Debug, Default)]
pub(crate) struct ChainOutcome {
    /// The origin case sits on a cycle of overruling edges (mutual
    /// overruling) — a data inconsistency, flagged for manual review.
    pub cycle: bool,
    /// The depth cap or deadline cut the walk short.
    pub truncated: bool,
}

/// Follow chains of authoritative overruling edges upward from `origin`.
///
/// A visits-set bounds the walk against cycles; reaching the origin again
/// means mutual overruling. Depth is capped by config, and the shared
/// query deadline applies.
pub(crate) fn walk_overrule_chain(
    store: &dyn GraphStore,
    origin: &str,
    as_of: NaiveDate,
    config: &ResolverConfig,
    deadline: Instant,
) -> LexResult<ChainOutcome> {
    let mut outcome = ChainOutcome::default();
    let mut visited: HashSet<String> = HashSet::new();
    visited.insert(origin.to_string());

    // (case id, depth) frontier, depth-first. Each entry carries its own
    // depth, so the cap holds regardless of visit order.
    let mut frontier: Vec<(String, usize)> = vec![(origin.to_string(), 0)];

    while let Some((current, depth)) = frontier.pop() {
        if Instant::now() >= deadline {
            outcome.truncated = true;
            break;
        }
        if depth >= config.max_overrule_depth {
            outcome.truncated = true;
            continue;
        }

        for edge in store.get_incoming_edges(&current, Some(as_of))? {
            if !edge.is_authoritative_overrule(config.overrule_certainty_floor) {
                continue;
            }
            if edge.citing_id == origin {
                warn!(origin, via = %current, "mutual overruling cycle detected");
                outcome.cycle = true;
                continue;
            }
            if visited.insert(edge.citing_id.clone()) {
                frontier.push((edge.citing_id, depth + 1));
            }
        }
    }

    Ok(outcome)
}

use std::collections::{HashSet, VecDeque};

use tracing::debug;

use lex_core::case::Case;
use lex_core::citation::Treatment;
use lex_core::config::RankerConfig;
use lex_core::errors::LexResult;
use lex_core::traits::GraphStore;

/// Whether a doctrine grew along a citation chain or merely got restated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoctrineStability {
    /// More expansions than clarifications on the path.
    Expanding,
    Stable,
}

/// One citation chain from a landmark case to a later interpretation.
#[derive(Debug, Clone, PartialEq)]
pub struct DoctrineEvolution {
    pub foundational_id: String,
    pub foundational_name: String,
    pub modern_id: String,
    pub modern_name: String,
    /// Hops on the citation chain.
    pub path_length: usize,
    /// `expanded` treatments along the path.
    pub expansions: usize,
    /// `explained` treatments along the path.
    pub clarifications: usize,
    pub time_span_years: i64,
    pub stability: DoctrineStability,
}

/// Treatments that carry a doctrine forward rather than contest it.
fn carries_doctrine(treatment: Treatment) -> bool {
    matches!(
        treatment,
        Treatment::Follows | Treatment::Explained | Treatment::Expanded
    )
}

/// Trace how the doctrines named by `doctrine_tags` evolved.
///
/// Starts from every landmark case carrying at least one of the tags and
/// follows chains of doctrine-carrying citations forward in time, capped
/// at `config.max_evolution_depth` hops. Each later case reports the
/// shortest chain that reaches it. Results sort by time span descending,
/// then case ids ascending, so the order is total and reproducible.
pub fn trace_doctrine_evolution(
    store: &dyn GraphStore,
    doctrine_tags: &[String],
    config: &RankerConfig,
) -> LexResult<Vec<DoctrineEvolution>> {
    let mut results = Vec::new();
    if doctrine_tags.is_empty() {
        return Ok(results);
    }

    for id in store.all_case_ids()? {
        let Some(foundational) = store.get_case(&id)? else {
            continue;
        };
        if !foundational.landmark {
            continue;
        }
        if !foundational
            .doctrine_tags
            .iter()
            .any(|t| doctrine_tags.contains(t))
        {
            continue;
        }
        trace_from(store, &foundational, config.max_evolution_depth, &mut results)?;
    }

    results.sort_by(|a, b| {
        b.time_span_years
            .cmp(&a.time_span_years)
            .then_with(|| a.foundational_id.cmp(&b.foundational_id))
            .then_with(|| a.modern_id.cmp(&b.modern_id))
    });
    debug!(
        tags = doctrine_tags.len(),
        chains = results.len(),
        "doctrine evolution traced"
    );
    Ok(results)
}

fn trace_from(
    store: &dyn GraphStore,
    foundational: &Case,
    max_depth: usize,
    out: &mut Vec<DoctrineEvolution>,
) -> LexResult<()> {
    let mut visited: HashSet<String> = HashSet::new();
    visited.insert(foundational.id.clone());

    // (case id, depth, expansions, clarifications), breadth-first so each
    // case reports the shortest chain reaching it.
    let mut frontier: VecDeque<(String, usize, usize, usize)> = VecDeque::new();
    frontier.push_back((foundational.id.clone(), 0, 0, 0));

    while let Some((current, depth, expansions, clarifications)) = frontier.pop_front() {
        if depth >= max_depth {
            continue;
        }
        for citation in store.get_incoming_edges(&current, None)? {
            if !carries_doctrine(citation.treatment) {
                continue;
            }
            if !visited.insert(citation.citing_id.clone()) {
                continue;
            }
            let Some(modern) = store.get_case(&citation.citing_id)? else {
                continue;
            };
            if modern.decision_date <= foundational.decision_date {
                continue;
            }

            let expansions = expansions + usize::from(citation.treatment == Treatment::Expanded);
            let clarifications =
                clarifications + usize::from(citation.treatment == Treatment::Explained);
            out.push(DoctrineEvolution {
                foundational_id: foundational.id.clone(),
                foundational_name: foundational.case_name.clone(),
                modern_id: modern.id.clone(),
                modern_name: modern.case_name.clone(),
                path_length: depth + 1,
                expansions,
                clarifications,
                time_span_years: (modern.decision_date - foundational.decision_date).num_days()
                    / 365,
                stability: if expansions > clarifications {
                    DoctrineStability::Expanding
                } else {
                    DoctrineStability::Stable
                },
            });
            frontier.push_back((modern.id, depth + 1, expansions, clarifications));
        }
    }
    Ok(())
}

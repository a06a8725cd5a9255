use std::sync::atomic::AtomicBool;

use proptest::prelude::*;

use lex_authority::{run_pagerank, CitationGraph};
use lex_core::citation::Treatment;
use lex_core::config::ScorerConfig;
use lex_core::GraphStore;
use lex_store::SqliteGraphStore;
use test_fixtures::{case, date, edge, seed_courts};

fn graph_with(n: usize, edges: &[(usize, usize, f64)]) -> CitationGraph {
    let store = SqliteGraphStore::open_in_memory().unwrap();
    seed_courts(&store).unwrap();
    for i in 0..n {
        store
            .upsert_case(&case(&format!("c{i:02}"), "sdny", "US-2", date(2000, 1, 1)))
            .unwrap();
    }
    for &(from, to, w) in edges {
        let (from, to) = (from % n, to % n);
        let treatment = if w < 0.0 {
            Treatment::Criticized
        } else {
            Treatment::Follows
        };
        store
            .upsert_edge(
                &edge(
                    &format!("c{from:02}"),
                    &format!("c{to:02}"),
                    treatment,
                    date(2001, 1, 1),
                )
                .with_weight(w),
            )
            .unwrap();
    }
    CitationGraph::load(&store).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    // Sub-stochastic transition plus the zero floor keeps every score in
    // [0, 1] and the total mass at most 1, for any graph shape.
    #[test]
    fn scores_stay_bounded(
        n in 1usize..8,
        edges in proptest::collection::vec(
            (0usize..8, 0usize..8, -10.0f64..10.0),
            0..20,
        ),
    ) {
        let graph = graph_with(n, &edges);
        let outcome =
            run_pagerank(&graph, &ScorerConfig::default(), &AtomicBool::new(false)).unwrap();

        let sum: f64 = outcome.scores.values().sum();
        prop_assert!(sum <= 1.0 + 1e-9, "mass {sum} exceeds 1");
        for (id, score) in &outcome.scores {
            prop_assert!(score.is_finite(), "{id} not finite");
            prop_assert!(*score >= 0.0, "{id} negative: {score}");
            prop_assert!(*score <= 1.0 + 1e-9, "{id} above 1: {score}");
        }
    }

    // Two runs over the same stored graph agree bit for bit.
    #[test]
    fn runs_are_deterministic(
        n in 1usize..6,
        edges in proptest::collection::vec(
            (0usize..6, 0usize..6, -10.0f64..10.0),
            0..12,
        ),
    ) {
        let config = ScorerConfig::default();
        let first =
            run_pagerank(&graph_with(n, &edges), &config, &AtomicBool::new(false)).unwrap();
        let second =
            run_pagerank(&graph_with(n, &edges), &config, &AtomicBool::new(false)).unwrap();
        prop_assert_eq!(first.scores, second.scores);
        prop_assert_eq!(first.iterations, second.iterations);
    }
}

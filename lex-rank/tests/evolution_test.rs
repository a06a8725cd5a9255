use lex_core::citation::Treatment;
use lex_core::config::RankerConfig;
use lex_core::GraphStore;
use lex_rank::{trace_doctrine_evolution, DoctrineStability};
use lex_store::SqliteGraphStore;
use test_fixtures::{case, date, edge, seed_courts};

fn tags(list: &[&str]) -> Vec<String> {
    list.iter().map(|t| t.to_string()).collect()
}

#[test]
fn chains_of_positive_citations_trace_from_the_landmark() {
    let store = SqliteGraphStore::open_in_memory().unwrap();
    seed_courts(&store).unwrap();
    store
        .upsert_case(
            &case("base", "scotus", "US", date(1970, 1, 1))
                .with_tags(&["privacy"])
                .with_landmark(true),
        )
        .unwrap();
    store
        .upsert_case(&case("clarifier", "scotus", "US", date(1980, 1, 1)))
        .unwrap();
    store
        .upsert_case(&case("expander", "scotus", "US", date(1995, 1, 1)))
        .unwrap();
    store
        .upsert_case(&case("expander2", "scotus", "US", date(2000, 1, 1)))
        .unwrap();
    store
        .upsert_edge(&edge("clarifier", "base", Treatment::Explained, date(1980, 6, 1)))
        .unwrap();
    store
        .upsert_edge(&edge("expander", "clarifier", Treatment::Expanded, date(1995, 6, 1)))
        .unwrap();
    store
        .upsert_edge(&edge("expander2", "expander", Treatment::Expanded, date(2000, 6, 1)))
        .unwrap();

    let chains =
        trace_doctrine_evolution(&store, &tags(&["privacy"]), &RankerConfig::default()).unwrap();

    // Longest time span first.
    let moderns: Vec<&str> = chains.iter().map(|c| c.modern_id.as_str()).collect();
    assert_eq!(moderns, vec!["expander2", "expander", "clarifier"]);

    let clarifier = &chains[2];
    assert_eq!(clarifier.path_length, 1);
    assert_eq!(clarifier.clarifications, 1);
    assert_eq!(clarifier.expansions, 0);
    assert_eq!(clarifier.time_span_years, 10);
    assert_eq!(clarifier.stability, DoctrineStability::Stable);

    // Two expansions against one clarification along the full chain.
    let end = &chains[0];
    assert_eq!(end.path_length, 3);
    assert_eq!(end.expansions, 2);
    assert_eq!(end.time_span_years, 30);
    assert_eq!(end.stability, DoctrineStability::Expanding);
}

#[test]
fn negative_treatment_breaks_the_chain() {
    let store = SqliteGraphStore::open_in_memory().unwrap();
    seed_courts(&store).unwrap();
    store
        .upsert_case(
            &case("base", "scotus", "US", date(1970, 1, 1))
                .with_tags(&["privacy"])
                .with_landmark(true),
        )
        .unwrap();
    store
        .upsert_case(&case("critic", "scotus", "US", date(1980, 1, 1)))
        .unwrap();
    store
        .upsert_case(&case("devotee", "scotus", "US", date(1990, 1, 1)))
        .unwrap();
    store
        .upsert_case(&case("direct", "scotus", "US", date(1985, 1, 1)))
        .unwrap();
    store
        .upsert_edge(&edge("critic", "base", Treatment::Criticized, date(1980, 6, 1)))
        .unwrap();
    // Following a critic does not carry the doctrine.
    store
        .upsert_edge(&edge("devotee", "critic", Treatment::Follows, date(1990, 6, 1)))
        .unwrap();
    store
        .upsert_edge(&edge("direct", "base", Treatment::Follows, date(1985, 6, 1)))
        .unwrap();

    let chains =
        trace_doctrine_evolution(&store, &tags(&["privacy"]), &RankerConfig::default()).unwrap();
    assert_eq!(chains.len(), 1);
    assert_eq!(chains[0].modern_id, "direct");
}

#[test]
fn only_landmark_cases_with_a_matching_tag_seed_a_trace() {
    let store = SqliteGraphStore::open_in_memory().unwrap();
    seed_courts(&store).unwrap();
    store
        .upsert_case(&case("plain", "scotus", "US", date(1970, 1, 1)).with_tags(&["privacy"]))
        .unwrap();
    store
        .upsert_case(
            &case("offtopic", "scotus", "US", date(1970, 1, 1))
                .with_tags(&["contracts"])
                .with_landmark(true),
        )
        .unwrap();
    store
        .upsert_case(&case("citer", "scotus", "US", date(1990, 1, 1)))
        .unwrap();
    store
        .upsert_edge(&edge("citer", "plain", Treatment::Follows, date(1990, 6, 1)))
        .unwrap();
    store
        .upsert_edge(&edge("citer", "offtopic", Treatment::Follows, date(1990, 6, 1)))
        .unwrap();

    let config = RankerConfig::default();
    assert!(trace_doctrine_evolution(&store, &tags(&["privacy"]), &config)
        .unwrap()
        .is_empty());
    assert!(trace_doctrine_evolution(&store, &[], &config)
        .unwrap()
        .is_empty());
}

#[test]
fn trace_stops_at_the_depth_cap() {
    let store = SqliteGraphStore::open_in_memory().unwrap();
    seed_courts(&store).unwrap();
    store
        .upsert_case(
            &case("base", "scotus", "US", date(1970, 1, 1))
                .with_tags(&["privacy"])
                .with_landmark(true),
        )
        .unwrap();
    let mut prev = "base".to_string();
    for (i, year) in [(1, 1980), (2, 1990), (3, 2000)] {
        let id = format!("gen{i}");
        store
            .upsert_case(&case(&id, "scotus", "US", date(year, 1, 1)))
            .unwrap();
        store
            .upsert_edge(&edge(&id, &prev, Treatment::Follows, date(year, 6, 1)))
            .unwrap();
        prev = id;
    }

    let config = RankerConfig {
        max_evolution_depth: 2,
        ..RankerConfig::default()
    };
    let chains = trace_doctrine_evolution(&store, &tags(&["privacy"]), &config).unwrap();
    let moderns: Vec<&str> = chains.iter().map(|c| c.modern_id.as_str()).collect();
    assert_eq!(moderns, vec!["gen2", "gen1"]);
}

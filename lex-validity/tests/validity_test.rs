use lex_core::case::ValidityStatus;
use lex_core::citation::Treatment;
use lex_core::config::ResolverConfig;
use lex_core::errors::{LexError, ResolveError};
use lex_core::GraphStore;
use lex_store::SqliteGraphStore;
use lex_validity::{summarize_treatment, ValidityResolver};
use test_fixtures::{case, date, edge, seed_courts};

fn store_with_case(id: &str) -> SqliteGraphStore {
    let store = SqliteGraphStore::open_in_memory().unwrap();
    seed_courts(&store).unwrap();
    store
        .upsert_case(&case(id, "scotus", "US", date(2010, 6, 1)))
        .unwrap();
    store
}

fn resolver() -> ValidityResolver {
    ValidityResolver::new(ResolverConfig::default())
}

#[test]
fn uncited_case_is_unchallenged_good_law() {
    let store = store_with_case("lone");
    let record = resolver()
        .resolve(&store, "lone", Some(date(2020, 1, 1)))
        .unwrap();

    assert_eq!(record.status, ValidityStatus::GoodLaw);
    assert_eq!(record.confidence.value(), 1.0);
    assert!(record.contributors.is_empty());
    assert!(!record.citation_conflict);
    assert!(!record.incomplete);
}

#[test]
fn overruling_flips_validity_only_after_it_issues() {
    let store = store_with_case("target");
    store
        .upsert_case(&case("approver", "ca2", "US-2", date(2012, 1, 1)))
        .unwrap();
    store
        .upsert_case(&case("overruler", "scotus", "US", date(2018, 1, 1)))
        .unwrap();
    store
        .upsert_edge(&edge("approver", "target", Treatment::Follows, date(2012, 3, 1)))
        .unwrap();
    store
        .upsert_edge(
            &edge("overruler", "target", Treatment::Overruled, date(2018, 3, 1))
                .with_certainty(0.95),
        )
        .unwrap();

    let r = resolver();

    // Before the overruling issued: only the approval is visible.
    let before = r.resolve(&store, "target", Some(date(2015, 1, 1))).unwrap();
    assert_eq!(before.status, ValidityStatus::GoodLaw);
    assert_eq!(before.confidence.value(), 1.0);
    assert_eq!(before.contributors.len(), 1);

    // After: the direct authoritative overruling edge forces the status.
    let after = r.resolve(&store, "target", Some(date(2020, 1, 1))).unwrap();
    assert_eq!(after.status, ValidityStatus::Overruled);
    assert_eq!(after.contributors.len(), 2);
    // A direct overruling carries its own extraction certainty.
    assert!((after.confidence.value() - 0.95).abs() < 1e-9);
    assert!(after.confidence.value() > 0.8);
}

#[test]
fn point_in_time_resolution_is_idempotent() {
    let store = store_with_case("target");
    store
        .upsert_case(&case("critic", "ca2", "US-2", date(2015, 1, 1)))
        .unwrap();
    store
        .upsert_edge(&edge("critic", "target", Treatment::Criticized, date(2015, 6, 1)))
        .unwrap();

    let r = resolver();
    let first = r.resolve(&store, "target", Some(date(2016, 1, 1))).unwrap();
    let second = r.resolve(&store, "target", Some(date(2016, 1, 1))).unwrap();
    assert_eq!(first, second);
}

#[test]
fn low_certainty_overruling_does_not_force_status() {
    let store = store_with_case("target");
    store
        .upsert_case(&case("doubter", "sdny", "US-2", date(2015, 1, 1)))
        .unwrap();
    store
        .upsert_edge(
            &edge("doubter", "target", Treatment::Overruled, date(2015, 6, 1))
                .with_certainty(0.5),
        )
        .unwrap();

    let record = resolver()
        .resolve(&store, "target", Some(date(2016, 1, 1)))
        .unwrap();
    // -1.0 × 1.0 × 5.0 × 1.0 = -5.0: questioned, not overruled.
    assert_eq!(record.status, ValidityStatus::Questioned);
}

#[test]
fn accumulated_criticism_overrules_without_a_direct_edge() {
    let store = store_with_case("target");
    for (i, court) in [("a", "scotus"), ("b", "scotus")] {
        let id = format!("critic-{i}");
        store
            .upsert_case(&case(&id, court, "US", date(2015, 1, 1)))
            .unwrap();
        store
            .upsert_edge(&edge(&id, "target", Treatment::Criticized, date(2015, 6, 1)))
            .unwrap();
    }

    let record = resolver()
        .resolve(&store, "target", Some(date(2016, 1, 1)))
        .unwrap();
    // Two of -0.7 × 0.8 × 10.0 = -11.2, past the overrule threshold.
    assert!((record.weighted_impact - -11.2).abs() < 1e-9);
    assert_eq!(record.status, ValidityStatus::Overruled);
}

#[test]
fn weak_unopposed_criticism_limits_the_holding() {
    let store = store_with_case("target");
    store
        .upsert_case(&case("nitpick", "sdny", "US-2", date(2015, 1, 1)))
        .unwrap();
    store
        .upsert_edge(&edge("nitpick", "target", Treatment::Distinguished, date(2015, 6, 1)))
        .unwrap();

    let record = resolver()
        .resolve(&store, "target", Some(date(2016, 1, 1)))
        .unwrap();
    // -0.3 × 0.6 × 5.0 = -0.9: inside the near-zero band, one
    // negative-weak edge, nothing positive.
    assert_eq!(record.status, ValidityStatus::Limited);
}

#[test]
fn superseding_statute_yields_superseded_status() {
    let store = store_with_case("target");
    store
        .upsert_case(&case("statute-case", "scotus", "US", date(2018, 1, 1)))
        .unwrap();
    store
        .upsert_edge(&edge("statute-case", "target", Treatment::Superseded, date(2018, 6, 1)))
        .unwrap();

    let record = resolver()
        .resolve(&store, "target", Some(date(2020, 1, 1)))
        .unwrap();
    assert_eq!(record.status, ValidityStatus::Superseded);
}

#[test]
fn mutual_overruling_is_flagged_not_looped() {
    let store = store_with_case("alpha");
    store
        .upsert_case(&case("beta", "scotus", "US", date(2012, 1, 1)))
        .unwrap();
    store
        .upsert_edge(&edge("beta", "alpha", Treatment::Overruled, date(2012, 6, 1)))
        .unwrap();
    store
        .upsert_edge(&edge("alpha", "beta", Treatment::Overruled, date(2013, 6, 1)))
        .unwrap();

    let record = resolver()
        .resolve(&store, "alpha", Some(date(2020, 1, 1)))
        .unwrap();
    assert_eq!(record.status, ValidityStatus::Overruled);
    assert_eq!(record.confidence.value(), 0.0);
    assert!(record.citation_conflict);
}

#[test]
fn chain_walk_stops_at_the_depth_cap() {
    let store = store_with_case("c0");
    // c0 overruled by c1, c1 by c2, ... deeper than the cap allows.
    for i in 1..=4 {
        store
            .upsert_case(&case(&format!("c{i}"), "scotus", "US", date(2012, 1, 1)))
            .unwrap();
        store
            .upsert_edge(&edge(
                &format!("c{i}"),
                &format!("c{}", i - 1),
                Treatment::Overruled,
                date(2013, 1, 1),
            ))
            .unwrap();
    }

    let config = ResolverConfig {
        max_overrule_depth: 2,
        ..ResolverConfig::default()
    };
    let record = ValidityResolver::new(config)
        .resolve(&store, "c0", Some(date(2020, 1, 1)))
        .unwrap();
    assert_eq!(record.status, ValidityStatus::Overruled);
    assert!(record.incomplete);
}

#[test]
fn deadline_exhaustion_yields_an_incomplete_partial() {
    let store = store_with_case("target");
    store
        .upsert_case(&case("fan", "ca2", "US-2", date(2012, 1, 1)))
        .unwrap();
    store
        .upsert_edge(&edge("fan", "target", Treatment::Follows, date(2012, 6, 1)))
        .unwrap();

    let config = ResolverConfig {
        deadline_ms: 0,
        ..ResolverConfig::default()
    };
    let record = ValidityResolver::new(config)
        .resolve(&store, "target", Some(date(2015, 1, 1)))
        .unwrap();

    // Nothing was weighed in time; the partial leans good law.
    assert!(record.incomplete);
    assert_eq!(record.status, ValidityStatus::GoodLaw);
    assert!(record.contributors.is_empty());
}

#[test]
fn as_of_before_the_decision_date_is_rejected() {
    let store = store_with_case("target");
    let err = resolver()
        .resolve(&store, "target", Some(date(2000, 1, 1)))
        .unwrap_err();
    assert!(matches!(
        err,
        LexError::Resolve(ResolveError::InvalidAsOf { .. })
    ));
}

#[test]
fn resolve_and_record_persists_the_outcome() {
    let store = store_with_case("target");
    store
        .upsert_case(&case("overruler", "scotus", "US", date(2018, 1, 1)))
        .unwrap();
    store
        .upsert_edge(&edge("overruler", "target", Treatment::Overruled, date(2018, 6, 1)))
        .unwrap();

    let record = resolver()
        .resolve_and_record(&store, "target", Some(date(2020, 1, 1)))
        .unwrap();

    let stored = store.get_case("target").unwrap().unwrap();
    assert_eq!(stored.status, record.status);
    assert_eq!(stored.validity_confidence, record.confidence);
}

#[test]
fn treatment_summary_counts_by_category() {
    let store = store_with_case("target");
    let citers = [
        ("pro", Treatment::Follows),
        ("meh", Treatment::Cited),
        ("con", Treatment::Criticized),
    ];
    for (id, treatment) in citers {
        store
            .upsert_case(&case(id, "ca2", "US-2", date(2012, 1, 1)))
            .unwrap();
        store
            .upsert_edge(&edge(id, "target", treatment, date(2012, 6, 1)))
            .unwrap();
    }

    let summary = summarize_treatment(&store, "target", Some(date(2015, 1, 1))).unwrap();
    assert_eq!(summary.total_citations, 3);
    assert_eq!(summary.positive_citations, 1);
    assert_eq!(summary.neutral_citations, 1);
    assert_eq!(summary.negative_citations, 1);
    // Follows +1.0×1.0 and Criticized -0.7×0.8 at weight 8.0: net +3.52.
    assert!((summary.weighted_authority_impact - 3.52).abs() < 1e-9);
}

use chrono::NaiveDate;
use proptest::prelude::*;

use lex_core::citation::ALL_TREATMENTS;
use lex_core::models::CitationRecord;
use lex_treatment::classify;

fn record(raw: &str, quote_len: usize) -> CitationRecord {
    CitationRecord::new(
        "citing",
        "cited",
        raw,
        NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
    )
    .with_quotation_len(quote_len)
}

proptest! {
    // Classification is total: any descriptor yields an in-range result.
    #[test]
    fn classify_never_panics_and_stays_in_range(
        raw in ".*",
        quote_len in 0usize..10_000,
    ) {
        let c = classify(&record(&raw, quote_len));
        prop_assert!((-1.0..=1.0).contains(&c.impact));
        prop_assert!((0.0..=1.0).contains(&c.strength));
        prop_assert!((0.0..=1.0).contains(&c.certainty));
    }

    // Unrecognized descriptors never exceed the low-confidence cap.
    #[test]
    fn unknown_certainty_capped(raw in "[0-9!@#$%^&*()]{1,20}") {
        let c = classify(&record(&raw, 0));
        prop_assert!(!c.recognized);
        prop_assert!(c.certainty <= 0.3);
    }
}

#[test]
fn every_canonical_name_is_recognized() {
    for t in ALL_TREATMENTS {
        let c = classify(&record(t.as_str(), 0));
        assert!(c.recognized, "{t:?} not recognized by its own name");
        assert_eq!(c.treatment, t);
    }
}

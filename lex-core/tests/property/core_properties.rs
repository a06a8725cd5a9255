use proptest::prelude::*;

use lex_core::case::Confidence;
use lex_core::citation::{CitationEdge, Treatment, ALL_TREATMENTS};

proptest! {
    #[test]
    fn confidence_always_lands_in_unit_range(v in -1e9f64..1e9) {
        let c = Confidence::new(v);
        prop_assert!((0.0..=1.0).contains(&c.value()));
    }

    #[test]
    fn confidence_scaling_stays_clamped(v in 0.0f64..=1.0, factor in -10.0f64..10.0) {
        let scaled = Confidence::new(v) * factor;
        prop_assert!((0.0..=1.0).contains(&scaled.value()));
    }

    #[test]
    fn edge_builders_clamp_their_inputs(
        i in 0..ALL_TREATMENTS.len(),
        strength in -5.0f64..5.0,
        certainty in -5.0f64..5.0,
    ) {
        let date = chrono::NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        let edge = CitationEdge::new("a", "b", ALL_TREATMENTS[i], date)
            .with_strength(strength)
            .with_certainty(certainty);
        prop_assert!((0.0..=1.0).contains(&edge.strength));
        prop_assert!((0.0..=1.0).contains(&edge.certainty));
    }

    #[test]
    fn treatments_serialize_to_their_canonical_names(i in 0..ALL_TREATMENTS.len()) {
        let t = ALL_TREATMENTS[i];
        let json = serde_json::to_string(&t).unwrap();
        prop_assert_eq!(json, format!("\"{}\"", t.as_str()));
        let back: Treatment = serde_json::from_str(&format!("\"{}\"", t.as_str())).unwrap();
        prop_assert_eq!(back, t);
    }
}

//! Shared builders and canned citation graphs for tests across crates.

use chrono::NaiveDate;

use lex_core::case::{Case, Court, CourtLevel};
use lex_core::citation::{CitationEdge, Treatment};
use lex_core::errors::LexResult;
use lex_core::traits::GraphStore;

/// Date helper: panics on invalid input, test-only convenience.
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}

/// A supreme court binding in "US" and all circuits used by fixtures.
pub fn supreme_court() -> Court {
    Court {
        id: "scotus".to_string(),
        name: "Supreme Court".to_string(),
        level: CourtLevel::SupremeCourt,
        jurisdiction: "US".to_string(),
        base_authority_weight: 10.0,
        binding_jurisdictions: vec!["US".into(), "US-2".into(), "US-9".into()],
        persuasive_jurisdictions: vec![],
    }
}

/// An appellate court binding in its own circuit, persuasive nationally.
pub fn circuit_court(id: &str, jurisdiction: &str) -> Court {
    Court {
        id: id.to_string(),
        name: format!("Court of Appeals ({jurisdiction})"),
        level: CourtLevel::Appellate,
        jurisdiction: jurisdiction.to_string(),
        base_authority_weight: 8.0,
        binding_jurisdictions: vec![jurisdiction.to_string()],
        persuasive_jurisdictions: vec!["US".into()],
    }
}

/// A trial court with no reach beyond its own jurisdiction.
pub fn trial_court(id: &str, jurisdiction: &str) -> Court {
    Court {
        id: id.to_string(),
        name: format!("District Court ({jurisdiction})"),
        level: CourtLevel::Trial,
        jurisdiction: jurisdiction.to_string(),
        base_authority_weight: 5.0,
        binding_jurisdictions: vec![],
        persuasive_jurisdictions: vec![jurisdiction.to_string()],
    }
}

/// Case builder with sensible defaults.
pub fn case(id: &str, court_id: &str, jurisdiction: &str, decided: NaiveDate) -> Case {
    let mut c = Case::new(id, format!("{id} (test)"), court_id, jurisdiction, decided);
    c.recompute_content_hash();
    c
}

/// Edge builder with taxonomy defaults.
pub fn edge(citing: &str, cited: &str, treatment: Treatment, created: NaiveDate) -> CitationEdge {
    CitationEdge::new(citing, cited, treatment, created)
}

/// Seed a store with the three fixture courts.
pub fn seed_courts(store: &dyn GraphStore) -> LexResult<()> {
    store.upsert_court(&supreme_court())?;
    store.upsert_court(&circuit_court("ca2", "US-2"))?;
    store.upsert_court(&trial_court("sdny", "US-2"))?;
    Ok(())
}

/// Three mutually citing supreme-court cases with identical treatments —
/// the symmetric cycle used by convergence tests.
pub fn seed_triangle(store: &dyn GraphStore) -> LexResult<()> {
    seed_courts(store)?;
    let d = date(2000, 1, 1);
    for id in ["tri-a", "tri-b", "tri-c"] {
        store.upsert_case(&case(id, "scotus", "US", d))?;
    }
    let later = date(2001, 1, 1);
    store.upsert_edge(&edge("tri-a", "tri-b", Treatment::Follows, later).with_weight(1.0))?;
    store.upsert_edge(&edge("tri-b", "tri-c", Treatment::Follows, later).with_weight(1.0))?;
    store.upsert_edge(&edge("tri-c", "tri-a", Treatment::Follows, later).with_weight(1.0))?;
    Ok(())
}

//! Federal court reference data.
//!
//! Base weights and binding/persuasive scopes follow the upstream
//! platform's court hierarchy constants: supreme 10.0, circuit 8.0,
//! district 5.0. Circuit rulings bind their own circuit and persuade
//! nationally.

use lex_core::case::{Court, CourtLevel};
use lex_core::errors::LexResult;
use lex_core::traits::GraphStore;

pub const SUPREME_WEIGHT: f64 = 10.0;
pub const APPELLATE_WEIGHT: f64 = 8.0;
pub const DISTRICT_WEIGHT: f64 = 5.0;

const CIRCUITS: &[(&str, &str, &str)] = &[
    ("us-ca-1", "First Circuit", "US-1"),
    ("us-ca-2", "Second Circuit", "US-2"),
    ("us-ca-3", "Third Circuit", "US-3"),
    ("us-ca-4", "Fourth Circuit", "US-4"),
    ("us-ca-5", "Fifth Circuit", "US-5"),
    ("us-ca-6", "Sixth Circuit", "US-6"),
    ("us-ca-7", "Seventh Circuit", "US-7"),
    ("us-ca-8", "Eighth Circuit", "US-8"),
    ("us-ca-9", "Ninth Circuit", "US-9"),
    ("us-ca-10", "Tenth Circuit", "US-10"),
    ("us-ca-11", "Eleventh Circuit", "US-11"),
    ("us-ca-dc", "D.C. Circuit", "US-DC"),
    ("us-ca-fc", "Federal Circuit", "US-FC"),
];

/// The Supreme Court: binds everywhere the federal system reaches.
pub fn supreme_court() -> Court {
    let mut binding: Vec<String> = vec!["US".to_string()];
    binding.extend(CIRCUITS.iter().map(|(_, _, j)| j.to_string()));
    Court {
        id: "us-supreme-court".to_string(),
        name: "Supreme Court of the United States".to_string(),
        level: CourtLevel::SupremeCourt,
        jurisdiction: "US".to_string(),
        base_authority_weight: SUPREME_WEIGHT,
        binding_jurisdictions: binding,
        persuasive_jurisdictions: Vec::new(),
    }
}

/// A federal circuit court of appeals.
pub fn circuit_court(id: &str, name: &str, jurisdiction: &str) -> Court {
    Court {
        id: id.to_string(),
        name: format!("United States Court of Appeals for the {name}"),
        level: CourtLevel::Appellate,
        jurisdiction: jurisdiction.to_string(),
        base_authority_weight: APPELLATE_WEIGHT,
        binding_jurisdictions: vec![jurisdiction.to_string()],
        persuasive_jurisdictions: vec!["US".to_string()],
    }
}

/// Seed the supreme court and the thirteen circuit courts.
pub fn seed_federal_courts(store: &dyn GraphStore) -> LexResult<usize> {
    store.upsert_court(&supreme_court())?;
    for (id, name, jurisdiction) in CIRCUITS {
        store.upsert_court(&circuit_court(id, name, jurisdiction))?;
    }
    Ok(1 + CIRCUITS.len())
}

//! # lex-treatment
//!
//! Treatment classifier: maps raw treatment descriptors from the
//! extraction pipeline to canonical, signed treatments with certainty.
//! Unrecognized descriptors classify as low-certainty neutral citations
//! so ingestion never blocks on extraction noise.

mod classifier;
mod synonyms;

pub use classifier::{classify, ClassifiedTreatment};

//! # lex-engine
//!
//! Facade over the citation authority engine. Owns the published
//! [`AuthoritySnapshot`](lex_core::models::AuthoritySnapshot) (atomic Arc
//! swap, lock-free readers), the rescore job registry, and the validity
//! cache, and wires ingestion through the classifier and weight
//! calculator into the store.

mod engine;

pub use engine::LexEngine;

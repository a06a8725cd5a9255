//! Trait seams between subsystems.

mod graph_store;

pub use graph_store::{GraphStore, UpsertOutcome};

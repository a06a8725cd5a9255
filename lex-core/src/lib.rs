//! # lex-core
//!
//! Foundation crate for the lexgraph citation engine.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod case;
pub mod citation;
pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use case::{Case, Confidence, Court, CourtLevel, ValidityStatus};
pub use citation::{CitationEdge, Treatment, TreatmentCategory};
pub use config::EngineConfig;
pub use errors::{LexError, LexResult};
pub use models::{AuthoritySnapshot, CitationRecord, ValidityRecord};
pub use traits::GraphStore;

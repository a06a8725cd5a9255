//! Citation edges and the canonical treatment taxonomy.

mod edge;
mod treatment;

pub use edge::CitationEdge;
pub use treatment::{Treatment, TreatmentCategory, ALL_TREATMENTS};

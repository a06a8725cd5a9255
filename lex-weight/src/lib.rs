//! # lex-weight
//!
//! Edge weight calculator. Combines treatment strength, court hierarchy,
//! jurisdictional reach, and temporal decay into a single signed scalar.
//! Every factor is a pure function of static fields, so the same factors
//! serve both the authority scorer and the validity resolver.

pub mod factors;
mod formula;

pub use formula::{compute, compute_breakdown, WeightBreakdown};

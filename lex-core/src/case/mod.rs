//! Case and court reference data.

mod base;
mod confidence;
mod court;

pub use base::{Case, ValidityStatus};
pub use confidence::Confidence;
pub use court::{Court, CourtLevel};

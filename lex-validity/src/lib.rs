//! # lex-validity
//!
//! Point-in-time validity resolution: given a case and an `as_of` date,
//! determine whether the case was still good law on that date from the
//! citation treatments visible at the time. Fully reproducible — edge
//! gathering filters strictly on the citing opinion's issue date.

mod chain;
mod resolver;
mod summary;

pub use resolver::ValidityResolver;
pub use summary::summarize_treatment;

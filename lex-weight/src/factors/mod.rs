//! Pure weighting factors. Each returns a scalar from static fields only.

pub mod hierarchical;
pub mod jurisdictional;
pub mod temporal;

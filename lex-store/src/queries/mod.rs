//! Row-level query helpers, split per entity.

pub mod cases;
pub mod courts;
pub mod edges;

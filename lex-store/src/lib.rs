//! # lex-store
//!
//! SQLite implementation of the `GraphStore` trait: case/court/edge
//! persistence with referential integrity on citation edges.

mod queries;
mod schema;
mod store;

pub mod seed;

pub use store::SqliteGraphStore;

use lex_core::errors::{LexError, StoreError};

/// Convert a rusqlite error into the typed store error.
pub(crate) fn to_store_err(e: rusqlite::Error) -> LexError {
    LexError::Store(StoreError::Sqlite {
        message: e.to_string(),
    })
}

//! SqliteGraphStore — owns the connection, implements `GraphStore`.

use std::path::Path;
use std::sync::Mutex;

use chrono::NaiveDate;
use rusqlite::Connection;
use tracing::debug;

use lex_core::case::{Case, Confidence, Court, ValidityStatus};
use lex_core::citation::CitationEdge;
use lex_core::errors::LexResult;
use lex_core::traits::{GraphStore, UpsertOutcome};

use crate::{queries, schema, to_store_err};

/// SQLite-backed citation graph store.
///
/// A single connection behind a mutex: ingestion and query volumes here
/// are modest, and the scorer reads the whole graph once per pass into
/// its own snapshot rather than holding the connection.
pub struct SqliteGraphStore {
    conn: Mutex<Connection>,
}

impl SqliteGraphStore {
    /// Open a store backed by a file on disk.
    pub fn open(path: &Path) -> LexResult<Self> {
        let conn = Connection::open(path).map_err(to_store_err)?;
        Self::from_connection(conn)
    }

    /// Open an in-memory store (for testing).
    pub fn open_in_memory() -> LexResult<Self> {
        let conn = Connection::open_in_memory().map_err(to_store_err)?;
        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> LexResult<Self> {
        conn.pragma_update(None, "journal_mode", "WAL").ok();
        conn.pragma_update(None, "foreign_keys", "ON")
            .map_err(to_store_err)?;
        schema::create(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn with_conn<T>(&self, f: impl FnOnce(&Connection) -> LexResult<T>) -> LexResult<T> {
        let guard = self
            .conn
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        f(&guard)
    }
}

impl GraphStore for SqliteGraphStore {
    fn upsert_court(&self, court: &Court) -> LexResult<()> {
        self.with_conn(|conn| queries::courts::upsert(conn, court))
    }

    fn get_court(&self, court_id: &str) -> LexResult<Option<Court>> {
        self.with_conn(|conn| queries::courts::get(conn, court_id))
    }

    fn upsert_case(&self, case: &Case) -> LexResult<UpsertOutcome> {
        let outcome = self.with_conn(|conn| queries::cases::upsert(conn, case))?;
        debug!(case_id = %case.id, ?outcome, "case upsert");
        Ok(outcome)
    }

    fn get_case(&self, case_id: &str) -> LexResult<Option<Case>> {
        self.with_conn(|conn| queries::cases::get(conn, case_id))
    }

    fn all_case_ids(&self) -> LexResult<Vec<String>> {
        self.with_conn(queries::cases::all_ids)
    }

    fn case_count(&self) -> LexResult<usize> {
        self.with_conn(queries::cases::count)
    }

    fn upsert_edge(&self, edge: &CitationEdge) -> LexResult<()> {
        self.with_conn(|conn| queries::edges::insert(conn, edge))
    }

    fn get_incoming_edges(
        &self,
        case_id: &str,
        on_or_before: Option<NaiveDate>,
    ) -> LexResult<Vec<CitationEdge>> {
        self.with_conn(|conn| queries::edges::incoming(conn, case_id, on_or_before))
    }

    fn get_outgoing_edges(&self, case_id: &str) -> LexResult<Vec<CitationEdge>> {
        self.with_conn(|conn| queries::edges::outgoing(conn, case_id))
    }

    fn edge_count(&self) -> LexResult<usize> {
        self.with_conn(queries::edges::count)
    }

    fn update_score(&self, case_id: &str, score: f64, score_version: u64) -> LexResult<()> {
        self.with_conn(|conn| queries::cases::update_score(conn, case_id, score, score_version))
    }

    fn update_status(
        &self,
        case_id: &str,
        status: ValidityStatus,
        confidence: Confidence,
    ) -> LexResult<()> {
        self.with_conn(|conn| queries::cases::update_status(conn, case_id, status, confidence))
    }
}

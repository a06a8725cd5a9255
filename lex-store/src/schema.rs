//! Table and index creation. Idempotent; run on every open.

use rusqlite::Connection;

use lex_core::errors::LexResult;

use crate::to_store_err;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS courts (
    id                       TEXT PRIMARY KEY,
    name                     TEXT NOT NULL,
    level                    TEXT NOT NULL,
    jurisdiction             TEXT NOT NULL,
    base_authority_weight    REAL NOT NULL,
    binding_jurisdictions    TEXT NOT NULL,
    persuasive_jurisdictions TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS cases (
    id                  TEXT PRIMARY KEY,
    case_name           TEXT NOT NULL,
    court_id            TEXT NOT NULL REFERENCES courts(id),
    jurisdiction        TEXT NOT NULL,
    decision_date       TEXT NOT NULL,
    doctrine_tags       TEXT NOT NULL,
    landmark            INTEGER NOT NULL DEFAULT 0,
    status              TEXT NOT NULL DEFAULT 'good_law',
    validity_confidence REAL NOT NULL DEFAULT 1.0,
    authority_score     REAL NOT NULL DEFAULT 0.0,
    score_version       INTEGER NOT NULL DEFAULT 0,
    content_hash        TEXT NOT NULL,
    revision            INTEGER NOT NULL DEFAULT 0,
    ingested_at         TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS citation_edges (
    rowid_     INTEGER PRIMARY KEY AUTOINCREMENT,
    citing_id  TEXT NOT NULL REFERENCES cases(id),
    cited_id   TEXT NOT NULL REFERENCES cases(id),
    treatment  TEXT NOT NULL,
    impact     REAL NOT NULL,
    strength   REAL NOT NULL,
    certainty  REAL NOT NULL,
    binding    INTEGER NOT NULL DEFAULT 0,
    weight     REAL NOT NULL DEFAULT 0.0,
    created_on TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_edges_cited ON citation_edges(cited_id, created_on);
CREATE INDEX IF NOT EXISTS idx_edges_citing ON citation_edges(citing_id);
CREATE INDEX IF NOT EXISTS idx_cases_jurisdiction ON cases(jurisdiction);
CREATE INDEX IF NOT EXISTS idx_cases_status ON cases(status);
";

pub fn create(conn: &Connection) -> LexResult<()> {
    conn.execute_batch(SCHEMA).map_err(to_store_err)
}

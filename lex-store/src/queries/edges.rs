use chrono::NaiveDate;
use rusqlite::{params, Connection};

use lex_core::citation::{CitationEdge, Treatment};
use lex_core::errors::{LexError, LexResult, StoreError};

use crate::to_store_err;

use super::cases;

/// Insert a citation edge. Both endpoints must already exist; edges are
/// appended, never merged — conflicting treatments for the same pair
/// coexist and are reconciled downstream.
pub fn insert(conn: &Connection, edge: &CitationEdge) -> LexResult<()> {
    if !cases::exists(conn, &edge.citing_id)? {
        return Err(LexError::Store(StoreError::EdgeEndpointMissing {
            citing_id: edge.citing_id.clone(),
            cited_id: edge.cited_id.clone(),
            side: "citing",
        }));
    }
    if !cases::exists(conn, &edge.cited_id)? {
        return Err(LexError::Store(StoreError::EdgeEndpointMissing {
            citing_id: edge.citing_id.clone(),
            cited_id: edge.cited_id.clone(),
            side: "cited",
        }));
    }

    conn.execute(
        "INSERT INTO citation_edges (citing_id, cited_id, treatment, impact, strength,
                                     certainty, binding, weight, created_on)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            edge.citing_id,
            edge.cited_id,
            edge.treatment.as_str(),
            edge.impact,
            edge.strength,
            edge.certainty,
            edge.binding as i64,
            edge.weight,
            edge.created_on.to_string(),
        ],
    )
    .map_err(to_store_err)?;
    Ok(())
}

const EDGE_COLUMNS: &str =
    "citing_id, cited_id, treatment, impact, strength, certainty, binding, weight, created_on";

pub fn incoming(
    conn: &Connection,
    case_id: &str,
    on_or_before: Option<NaiveDate>,
) -> LexResult<Vec<CitationEdge>> {
    match on_or_before {
        Some(date) => {
            let sql = format!(
                "SELECT {EDGE_COLUMNS} FROM citation_edges
                 WHERE cited_id = ?1 AND created_on <= ?2
                 ORDER BY citing_id, created_on"
            );
            let mut stmt = conn.prepare(&sql).map_err(to_store_err)?;
            let rows = stmt
                .query_map(params![case_id, date.to_string()], row_to_edge)
                .map_err(to_store_err)?;
            collect_edges(rows)
        }
        None => {
            let sql = format!(
                "SELECT {EDGE_COLUMNS} FROM citation_edges
                 WHERE cited_id = ?1
                 ORDER BY citing_id, created_on"
            );
            let mut stmt = conn.prepare(&sql).map_err(to_store_err)?;
            let rows = stmt
                .query_map(params![case_id], row_to_edge)
                .map_err(to_store_err)?;
            collect_edges(rows)
        }
    }
}

pub fn outgoing(conn: &Connection, case_id: &str) -> LexResult<Vec<CitationEdge>> {
    let sql = format!(
        "SELECT {EDGE_COLUMNS} FROM citation_edges
         WHERE citing_id = ?1
         ORDER BY cited_id, created_on"
    );
    let mut stmt = conn.prepare(&sql).map_err(to_store_err)?;
    let rows = stmt
        .query_map(params![case_id], row_to_edge)
        .map_err(to_store_err)?;
    collect_edges(rows)
}

pub fn count(conn: &Connection) -> LexResult<usize> {
    let n: i64 = conn
        .query_row("SELECT COUNT(*) FROM citation_edges", [], |row| row.get(0))
        .map_err(to_store_err)?;
    Ok(n as usize)
}

fn collect_edges<'a>(
    rows: impl Iterator<Item = rusqlite::Result<LexResult<CitationEdge>>> + 'a,
) -> LexResult<Vec<CitationEdge>> {
    let mut edges = Vec::new();
    for row in rows {
        edges.push(row.map_err(to_store_err)??);
    }
    Ok(edges)
}

fn row_to_edge(row: &rusqlite::Row<'_>) -> rusqlite::Result<LexResult<CitationEdge>> {
    let citing_id: String = row.get(0)?;
    let cited_id: String = row.get(1)?;
    let treatment: String = row.get(2)?;
    let impact: f64 = row.get(3)?;
    let strength: f64 = row.get(4)?;
    let certainty: f64 = row.get(5)?;
    let binding: i64 = row.get(6)?;
    let weight: f64 = row.get(7)?;
    let created_on: String = row.get(8)?;

    Ok(build_edge(
        citing_id, cited_id, treatment, impact, strength, certainty, binding != 0, weight,
        created_on,
    ))
}

#[allow(clippy::too_many_arguments)]
fn build_edge(
    citing_id: String,
    cited_id: String,
    treatment: String,
    impact: f64,
    strength: f64,
    certainty: f64,
    binding: bool,
    weight: f64,
    created_on: String,
) -> LexResult<CitationEdge> {
    let corrupt = |reason: String| {
        LexError::Store(StoreError::CorruptRow {
            entity: "citation_edge",
            id: format!("{citing_id}->{cited_id}"),
            reason,
        })
    };

    let treatment = Treatment::from_str_name(&treatment)
        .ok_or_else(|| corrupt(format!("unknown treatment '{treatment}'")))?;
    let created_on = created_on
        .parse::<NaiveDate>()
        .map_err(|e| corrupt(e.to_string()))?;

    Ok(CitationEdge {
        citing_id,
        cited_id,
        treatment,
        impact,
        strength,
        certainty,
        binding,
        weight,
        created_on,
    })
}

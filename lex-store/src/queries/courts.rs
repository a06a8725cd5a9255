use rusqlite::{params, Connection, OptionalExtension};

use lex_core::case::{Court, CourtLevel};
use lex_core::errors::{LexError, LexResult, StoreError};

use crate::to_store_err;

pub fn upsert(conn: &Connection, court: &Court) -> LexResult<()> {
    conn.execute(
        "INSERT INTO courts (id, name, level, jurisdiction, base_authority_weight,
                             binding_jurisdictions, persuasive_jurisdictions)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
         ON CONFLICT(id) DO UPDATE SET
             name = excluded.name,
             level = excluded.level,
             jurisdiction = excluded.jurisdiction,
             base_authority_weight = excluded.base_authority_weight,
             binding_jurisdictions = excluded.binding_jurisdictions,
             persuasive_jurisdictions = excluded.persuasive_jurisdictions",
        params![
            court.id,
            court.name,
            court.level.as_str(),
            court.jurisdiction,
            court.base_authority_weight,
            serde_json::to_string(&court.binding_jurisdictions)
                .map_err(|e| LexError::Config(e.to_string()))?,
            serde_json::to_string(&court.persuasive_jurisdictions)
                .map_err(|e| LexError::Config(e.to_string()))?,
        ],
    )
    .map_err(to_store_err)?;
    Ok(())
}

pub fn get(conn: &Connection, court_id: &str) -> LexResult<Option<Court>> {
    conn.query_row(
        "SELECT id, name, level, jurisdiction, base_authority_weight,
                binding_jurisdictions, persuasive_jurisdictions
         FROM courts WHERE id = ?1",
        params![court_id],
        row_to_court,
    )
    .optional()
    .map_err(to_store_err)?
    .transpose()
}

fn row_to_court(row: &rusqlite::Row<'_>) -> rusqlite::Result<LexResult<Court>> {
    let id: String = row.get(0)?;
    let name: String = row.get(1)?;
    let level_str: String = row.get(2)?;
    let jurisdiction: String = row.get(3)?;
    let base_authority_weight: f64 = row.get(4)?;
    let binding_json: String = row.get(5)?;
    let persuasive_json: String = row.get(6)?;

    Ok(build_court(
        id,
        name,
        level_str,
        jurisdiction,
        base_authority_weight,
        binding_json,
        persuasive_json,
    ))
}

fn build_court(
    id: String,
    name: String,
    level_str: String,
    jurisdiction: String,
    base_authority_weight: f64,
    binding_json: String,
    persuasive_json: String,
) -> LexResult<Court> {
    let level = CourtLevel::from_str_name(&level_str).ok_or_else(|| {
        LexError::Store(StoreError::CorruptRow {
            entity: "court",
            id: id.clone(),
            reason: format!("unknown level '{level_str}'"),
        })
    })?;
    let binding_jurisdictions: Vec<String> = serde_json::from_str(&binding_json).map_err(|e| {
        LexError::Store(StoreError::CorruptRow {
            entity: "court",
            id: id.clone(),
            reason: e.to_string(),
        })
    })?;
    let persuasive_jurisdictions: Vec<String> =
        serde_json::from_str(&persuasive_json).map_err(|e| {
            LexError::Store(StoreError::CorruptRow {
                entity: "court",
                id: id.clone(),
                reason: e.to_string(),
            })
        })?;

    Ok(Court {
        id,
        name,
        level,
        jurisdiction,
        base_authority_weight,
        binding_jurisdictions,
        persuasive_jurisdictions,
    })
}

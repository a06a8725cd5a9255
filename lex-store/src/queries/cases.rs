use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::{params, Connection, OptionalExtension};

use lex_core::case::{Case, Confidence, ValidityStatus};
use lex_core::errors::{LexError, LexResult, StoreError};
use lex_core::traits::UpsertOutcome;

use crate::to_store_err;

/// Insert or supersede a case. The content hash decides: identical hash is
/// a no-op, a differing hash replaces ingestion-owned fields in place and
/// bumps the revision. Score and status fields survive a supersede — they
/// belong to the scorer and resolver.
pub fn upsert(conn: &Connection, case: &Case) -> LexResult<UpsertOutcome> {
    let existing: Option<(String, u64)> = conn
        .query_row(
            "SELECT content_hash, revision FROM cases WHERE id = ?1",
            params![case.id],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .optional()
        .map_err(to_store_err)?;

    match existing {
        None => {
            conn.execute(
                "INSERT INTO cases (id, case_name, court_id, jurisdiction, decision_date,
                                    doctrine_tags, landmark, status, validity_confidence,
                                    authority_score, score_version, content_hash, revision,
                                    ingested_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)",
                params![
                    case.id,
                    case.case_name,
                    case.court_id,
                    case.jurisdiction,
                    case.decision_date.to_string(),
                    serde_json::to_string(&case.doctrine_tags)
                        .map_err(|e| LexError::Config(e.to_string()))?,
                    case.landmark as i64,
                    case.status.as_str(),
                    case.validity_confidence.value(),
                    case.authority_score,
                    case.score_version as i64,
                    case.content_hash,
                    case.revision as i64,
                    case.ingested_at.to_rfc3339(),
                ],
            )
            .map_err(to_store_err)?;
            Ok(UpsertOutcome::Created)
        }
        Some((hash, _)) if hash == case.content_hash => Ok(UpsertOutcome::Unchanged),
        Some((_, revision)) => {
            conn.execute(
                "UPDATE cases SET case_name = ?2, court_id = ?3, jurisdiction = ?4,
                                  decision_date = ?5, doctrine_tags = ?6, landmark = ?7,
                                  content_hash = ?8, revision = ?9, ingested_at = ?10
                 WHERE id = ?1",
                params![
                    case.id,
                    case.case_name,
                    case.court_id,
                    case.jurisdiction,
                    case.decision_date.to_string(),
                    serde_json::to_string(&case.doctrine_tags)
                        .map_err(|e| LexError::Config(e.to_string()))?,
                    case.landmark as i64,
                    case.content_hash,
                    (revision + 1) as i64,
                    Utc::now().to_rfc3339(),
                ],
            )
            .map_err(to_store_err)?;
            Ok(UpsertOutcome::Superseded)
        }
    }
}

pub fn get(conn: &Connection, case_id: &str) -> LexResult<Option<Case>> {
    conn.query_row(
        "SELECT id, case_name, court_id, jurisdiction, decision_date, doctrine_tags,
                landmark, status, validity_confidence, authority_score, score_version,
                content_hash, revision, ingested_at
         FROM cases WHERE id = ?1",
        params![case_id],
        row_to_case,
    )
    .optional()
    .map_err(to_store_err)?
    .transpose()
}

pub fn exists(conn: &Connection, case_id: &str) -> LexResult<bool> {
    let found: Option<i64> = conn
        .query_row(
            "SELECT 1 FROM cases WHERE id = ?1",
            params![case_id],
            |row| row.get(0),
        )
        .optional()
        .map_err(to_store_err)?;
    Ok(found.is_some())
}

pub fn all_ids(conn: &Connection) -> LexResult<Vec<String>> {
    let mut stmt = conn
        .prepare("SELECT id FROM cases ORDER BY id ASC")
        .map_err(to_store_err)?;
    let rows = stmt
        .query_map([], |row| row.get::<_, String>(0))
        .map_err(to_store_err)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(to_store_err)
}

pub fn count(conn: &Connection) -> LexResult<usize> {
    let n: i64 = conn
        .query_row("SELECT COUNT(*) FROM cases", [], |row| row.get(0))
        .map_err(to_store_err)?;
    Ok(n as usize)
}

pub fn update_score(
    conn: &Connection,
    case_id: &str,
    score: f64,
    score_version: u64,
) -> LexResult<()> {
    let changed = conn
        .execute(
            "UPDATE cases SET authority_score = ?2, score_version = ?3 WHERE id = ?1",
            params![case_id, score, score_version as i64],
        )
        .map_err(to_store_err)?;
    if changed == 0 {
        return Err(LexError::Store(StoreError::CaseNotFound {
            case_id: case_id.to_string(),
        }));
    }
    Ok(())
}

pub fn update_status(
    conn: &Connection,
    case_id: &str,
    status: ValidityStatus,
    confidence: Confidence,
) -> LexResult<()> {
    let changed = conn
        .execute(
            "UPDATE cases SET status = ?2, validity_confidence = ?3 WHERE id = ?1",
            params![case_id, status.as_str(), confidence.value()],
        )
        .map_err(to_store_err)?;
    if changed == 0 {
        return Err(LexError::Store(StoreError::CaseNotFound {
            case_id: case_id.to_string(),
        }));
    }
    Ok(())
}

fn row_to_case(row: &rusqlite::Row<'_>) -> rusqlite::Result<LexResult<Case>> {
    let id: String = row.get(0)?;
    let case_name: String = row.get(1)?;
    let court_id: String = row.get(2)?;
    let jurisdiction: String = row.get(3)?;
    let decision_date: String = row.get(4)?;
    let doctrine_tags: String = row.get(5)?;
    let landmark: i64 = row.get(6)?;
    let status: String = row.get(7)?;
    let validity_confidence: f64 = row.get(8)?;
    let authority_score: f64 = row.get(9)?;
    let score_version: i64 = row.get(10)?;
    let content_hash: String = row.get(11)?;
    let revision: i64 = row.get(12)?;
    let ingested_at: String = row.get(13)?;

    Ok(build_case(
        id,
        case_name,
        court_id,
        jurisdiction,
        decision_date,
        doctrine_tags,
        landmark != 0,
        status,
        validity_confidence,
        authority_score,
        score_version as u64,
        content_hash,
        revision as u64,
        ingested_at,
    ))
}

#[allow(clippy::too_many_arguments)]
fn build_case(
    id: String,
    case_name: String,
    court_id: String,
    jurisdiction: String,
    decision_date: String,
    doctrine_tags: String,
    landmark: bool,
    status: String,
    validity_confidence: f64,
    authority_score: f64,
    score_version: u64,
    content_hash: String,
    revision: u64,
    ingested_at: String,
) -> LexResult<Case> {
    let corrupt = |reason: String| {
        LexError::Store(StoreError::CorruptRow {
            entity: "case",
            id: id.clone(),
            reason,
        })
    };

    let decision_date = decision_date
        .parse::<NaiveDate>()
        .map_err(|e| corrupt(e.to_string()))?;
    let doctrine_tags: Vec<String> =
        serde_json::from_str(&doctrine_tags).map_err(|e| corrupt(e.to_string()))?;
    let status = ValidityStatus::from_str_name(&status)
        .ok_or_else(|| corrupt(format!("unknown status '{status}'")))?;
    let ingested_at = DateTime::parse_from_rfc3339(&ingested_at)
        .map_err(|e| corrupt(e.to_string()))?
        .with_timezone(&Utc);

    Ok(Case {
        id,
        case_name,
        court_id,
        jurisdiction,
        decision_date,
        doctrine_tags,
        landmark,
        status,
        validity_confidence: Confidence::new(validity_confidence),
        authority_score,
        score_version,
        content_hash,
        revision,
        ingested_at,
    })
}

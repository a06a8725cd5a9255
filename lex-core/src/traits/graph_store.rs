use chrono::NaiveDate;

use crate::case::{Case, Confidence, Court, ValidityStatus};
use crate::citation::CitationEdge;
use crate::errors::LexResult;

/// Outcome of a case upsert, decided by content-hash comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Created,
    /// Same id, same content hash — no-op.
    Unchanged,
    /// Same id, differing hash — superseded in place, revision bumped.
    Superseded,
}

/// Thin interface over the persistent directed citation graph.
///
/// Implementations must enforce referential integrity on edges: an edge
/// whose endpoints are not both present is rejected with
/// `StoreError::EdgeEndpointMissing`, never auto-created.
pub trait GraphStore: Send + Sync {
    // --- Reference data ---
    fn upsert_court(&self, court: &Court) -> LexResult<()>;
    fn get_court(&self, court_id: &str) -> LexResult<Option<Court>>;

    // --- Cases ---
    fn upsert_case(&self, case: &Case) -> LexResult<UpsertOutcome>;
    fn get_case(&self, case_id: &str) -> LexResult<Option<Case>>;
    /// All case ids, sorted ascending. The fixed iteration order keeps
    /// scoring runs reproducible.
    fn all_case_ids(&self) -> LexResult<Vec<String>>;
    fn case_count(&self) -> LexResult<usize>;

    // --- Edges ---
    fn upsert_edge(&self, edge: &CitationEdge) -> LexResult<()>;
    /// Incoming edges to `case_id`, optionally filtered to
    /// `created_on <= on_or_before`. Sorted by (citing_id, created_on).
    fn get_incoming_edges(
        &self,
        case_id: &str,
        on_or_before: Option<NaiveDate>,
    ) -> LexResult<Vec<CitationEdge>>;
    /// Outgoing edges from `case_id`, sorted by (cited_id, created_on).
    fn get_outgoing_edges(&self, case_id: &str) -> LexResult<Vec<CitationEdge>>;
    fn edge_count(&self) -> LexResult<usize>;

    // --- Computed-field writebacks ---
    /// Scorer-only mutation of the score fields.
    fn update_score(&self, case_id: &str, score: f64, score_version: u64) -> LexResult<()>;
    /// Resolver-only mutation of the status fields.
    fn update_status(
        &self,
        case_id: &str,
        status: ValidityStatus,
        confidence: Confidence,
    ) -> LexResult<()>;
}

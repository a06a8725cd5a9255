/// Graph-store errors for SQLite operations and referential checks.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("case not found: {case_id}")]
    CaseNotFound { case_id: String },

    #[error("court not found: {court_id}")]
    CourtNotFound { court_id: String },

    #[error("edge endpoint missing: {citing_id} -> {cited_id} ({side} side unknown)")]
    EdgeEndpointMissing {
        citing_id: String,
        cited_id: String,
        side: &'static str,
    },

    #[error("SQLite error: {message}")]
    Sqlite { message: String },

    #[error("corrupt row for {entity} {id}: {reason}")]
    CorruptRow {
        entity: &'static str,
        id: String,
        reason: String,
    },
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle of a rescore job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RescoreStatus {
    Running,
    /// Converged and published.
    Published,
    /// Hit the iteration cap; published with `converged = false`.
    PublishedUnconverged,
    Cancelled,
    Failed,
}

impl RescoreStatus {
    /// Whether the job has stopped, successfully or not.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Running)
    }
}

/// Handle to an in-flight or completed rescore job.
///
/// `trigger_rescore` is idempotent: a second trigger while a pass is
/// running returns the handle of the in-flight job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RescoreHandle {
    pub job_id: String,
    pub status: RescoreStatus,
    pub started_at: DateTime<Utc>,
    /// Snapshot version the job published, once finished.
    pub snapshot_version: Option<u64>,
}

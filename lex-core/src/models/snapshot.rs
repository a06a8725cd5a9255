use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Immutable, versioned authority score set.
///
/// Produced whole by a scoring pass and swapped in atomically; readers
/// always see a complete snapshot, never a partial update. The score map
/// is a BTreeMap so iteration order (and serialized form) is stable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthoritySnapshot {
    /// Monotonically increasing snapshot version.
    pub version: u64,
    /// case id → authority score.
    pub scores: BTreeMap<String, f64>,
    /// Fixed-point iterations actually run.
    pub iterations: usize,
    /// False when the iteration cap was hit before the tolerance was met.
    /// A soft warning for callers, not an error.
    pub converged: bool,
    pub computed_at: DateTime<Utc>,
}

impl AuthoritySnapshot {
    /// Empty placeholder snapshot (version 0) used before the first pass.
    pub fn empty() -> Self {
        Self {
            version: 0,
            scores: BTreeMap::new(),
            iterations: 0,
            converged: true,
            computed_at: Utc::now(),
        }
    }

    pub fn score(&self, case_id: &str) -> Option<f64> {
        self.scores.get(case_id).copied()
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

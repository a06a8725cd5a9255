use serde::{Deserialize, Serialize};

use crate::constants;

/// Validity resolver configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Weighted impact at or below this → `Overruled`. Negative.
    pub overrule_threshold: f64,
    /// Weighted impact at or below this → `Questioned`. Negative,
    /// above `overrule_threshold`.
    pub question_threshold: f64,
    /// Minimum certainty for a direct overruling edge to force `Overruled`.
    pub overrule_certainty_floor: f64,
    /// Depth cap for the overruling-chain traversal.
    pub max_overrule_depth: usize,
    /// Query deadline in milliseconds; exceeding it yields a partial
    /// record with `incomplete = true`.
    pub deadline_ms: u64,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            overrule_threshold: constants::DEFAULT_OVERRULE_THRESHOLD,
            question_threshold: constants::DEFAULT_QUESTION_THRESHOLD,
            overrule_certainty_floor: constants::DEFAULT_OVERRULE_CERTAINTY_FLOOR,
            max_overrule_depth: constants::DEFAULT_MAX_OVERRULE_DEPTH,
            deadline_ms: constants::DEFAULT_QUERY_DEADLINE_MS,
        }
    }
}

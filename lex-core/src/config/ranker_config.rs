use serde::{Deserialize, Serialize};

use crate::constants;

/// Precedent ranker configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RankerConfig {
    /// Boost for landmark cases.
    pub landmark_boost: f64,
    /// Boost when the case sits in the query's primary jurisdiction.
    pub primary_jurisdiction_boost: f64,
    /// Boost for related jurisdictions.
    pub related_jurisdiction_boost: f64,
    /// Penalty factor for all other jurisdictions.
    pub other_jurisdiction_factor: f64,
    /// Boost when ≥ `practice_area_overlap_min` doctrine tags overlap.
    pub practice_area_boost: f64,
    pub practice_area_overlap_min: usize,
    /// Query deadline in milliseconds; exceeding it yields a partial list.
    pub deadline_ms: u64,
    /// Chain-length cap for doctrine-evolution tracing.
    pub max_evolution_depth: usize,
}

impl Default for RankerConfig {
    fn default() -> Self {
        Self {
            landmark_boost: 1.5,
            primary_jurisdiction_boost: 1.3,
            related_jurisdiction_boost: 1.0,
            other_jurisdiction_factor: 0.8,
            practice_area_boost: 1.2,
            practice_area_overlap_min: 2,
            deadline_ms: constants::DEFAULT_QUERY_DEADLINE_MS,
            max_evolution_depth: constants::DEFAULT_MAX_EVOLUTION_DEPTH,
        }
    }
}

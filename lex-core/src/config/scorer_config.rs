use serde::{Deserialize, Serialize};

use crate::constants;

/// Authority scorer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScorerConfig {
    /// Damping factor for the fixed-point propagation, must be < 1.0.
    pub damping: f64,
    /// Iteration cap; hitting it publishes with `converged = false`.
    pub max_iterations: usize,
    /// Max per-node score delta that counts as converged.
    pub tolerance: f64,
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            damping: constants::DEFAULT_DAMPING,
            max_iterations: constants::DEFAULT_MAX_ITERATIONS,
            tolerance: constants::DEFAULT_TOLERANCE,
        }
    }
}

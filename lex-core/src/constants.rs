/// Engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Damping factor for the authority propagation fixed point.
pub const DEFAULT_DAMPING: f64 = 0.85;

/// Maximum fixed-point iterations before publishing unconverged.
pub const DEFAULT_MAX_ITERATIONS: usize = 100;

/// Convergence tolerance: max per-node score delta between iterations.
pub const DEFAULT_TOLERANCE: f64 = 1e-7;

/// Maximum depth for overruling-chain traversal.
pub const DEFAULT_MAX_OVERRULE_DEPTH: usize = 10;

/// Default deadline for resolver and ranker queries (milliseconds).
pub const DEFAULT_QUERY_DEADLINE_MS: u64 = 3_000;

/// Maximum chain length for doctrine-evolution tracing.
pub const DEFAULT_MAX_EVOLUTION_DEPTH: usize = 5;

/// Certainty cap for unrecognized treatment descriptors.
pub const UNKNOWN_TREATMENT_CERTAINTY_CAP: f64 = 0.3;

/// Minimum certainty for a direct overruling edge to force `Overruled`.
pub const DEFAULT_OVERRULE_CERTAINTY_FLOOR: f64 = 0.9;

/// Weighted-impact threshold at or below which a case is `Overruled`.
pub const DEFAULT_OVERRULE_THRESHOLD: f64 = -6.0;

/// Weighted-impact threshold at or below which a case is `Questioned`.
pub const DEFAULT_QUESTION_THRESHOLD: f64 = -2.0;

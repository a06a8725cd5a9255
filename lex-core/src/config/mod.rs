//! Engine configuration, loadable from TOML.

mod ranker_config;
mod resolver_config;
mod scorer_config;

pub use ranker_config::RankerConfig;
pub use resolver_config::ResolverConfig;
pub use scorer_config::ScorerConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{LexError, LexResult};

/// Top-level engine configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub scorer: ScorerConfig,
    pub resolver: ResolverConfig,
    pub ranker: RankerConfig,
}

impl EngineConfig {
    /// Parse a TOML document. Missing sections and keys fall back to
    /// defaults.
    pub fn from_toml_str(s: &str) -> LexResult<Self> {
        toml::from_str(s).map_err(|e| LexError::Config(e.to_string()))
    }
}

//! Engine configuration for edgewise
//!
//! Configuration is optional and read from a TOML file:
//!
//! ```toml
//! queue = "auto"       # auto | binary-heap | linear-scan
//! dense_slack = 1
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::heap::QueueStrategy;

/// Tunables for the path-finding algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Priority queue backend used by weighted shortest paths
    #[serde(default)]
    pub queue: QueueStrategy,

    /// Dense-graph crossover: with `n` vertices, `auto` switches to the
    /// linear-scan queue once the edge count exceeds `n(n-1)/2 - dense_slack * n`
    #[serde(default = "default_dense_slack")]
    pub dense_slack: usize,
}

fn default_dense_slack() -> usize {
    1
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            queue: QueueStrategy::default(),
            dense_slack: default_dense_slack(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        tracing::debug!(path = %path.display(), "load_config");
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        let config: EngineConfig = toml::from_str(content)?;
        tracing::debug!(queue = ?config.queue, dense_slack = config.dense_slack, "engine_config");
        Ok(config)
    }
}

use serde::{Deserialize, Serialize};

use super::Strategy;

/// The `[generator]` section of etch.toml.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Qualified name of the one marker this generator reacts to.
    pub marker: String,

    /// Emission strategy (defaults to structured).
    #[serde(default)]
    pub strategy: Strategy,
}

impl GeneratorConfig {
    pub fn new(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
            strategy: Strategy::default(),
        }
    }

    /// Override the emission strategy.
    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }
}

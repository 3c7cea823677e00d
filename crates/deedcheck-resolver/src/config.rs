//! Resolver configuration

use serde::{Deserialize, Serialize};

/// Configuration for county resolution
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Minimum similarity (0.0-1.0) for a fuzzy match to be accepted
    pub fuzzy_threshold: f64,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            fuzzy_threshold: 0.6,
        }
    }
}

impl ResolverConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.fuzzy_threshold) {
            return Err(format!(
                "fuzzy_threshold must be within [0.0, 1.0], got {}",
                self.fuzzy_threshold
            ));
        }
        Ok(())
    }
}

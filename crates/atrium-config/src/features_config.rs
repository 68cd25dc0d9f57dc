use std::collections::HashMap;

use serde::Deserialize;

/// Runtime feature flags, an open name -> bool map in config.toml:
///
/// ```toml
/// [features]
/// orcid_sync = true
/// ```
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(transparent)]
pub struct FeaturesConfig {
    flags: HashMap<String, bool>,
}

impl FeaturesConfig {
    /// Unknown flags read as disabled (fail-safe default).
    pub fn enabled(&self, name: &str) -> bool {
        self.flags.get(name).copied().unwrap_or(false)
    }

    pub fn set(&mut self, name: &str, enabled: bool) {
        self.flags.insert(name.to_string(), enabled);
    }
}

//! Application Configuration
//!
//! Tunables with built-in defaults. The UI may override any subset from a
//! JSON blob in local storage.

use serde::{Deserialize, Serialize};

use crate::storage::KeyValueStorage;

/// Storage key holding optional config overrides
pub const CONFIG_KEY: &str = "novilist.config";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// How many recent searches to remember
    pub recent_search_cap: usize,
    /// Color scheme used when none is stored
    pub default_color_scheme: String,
    /// Simulated round-trip latency
    pub latency_ms: u32,
    /// Random extra latency added on top, 0..jitter_ms
    pub jitter_ms: u32,
    /// How long toasts stay on screen
    pub toast_ms: u32,
    /// Log records kept for the diagnostics view
    pub log_capacity: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            recent_search_cap: 5,
            default_color_scheme: "violet".to_string(),
            latency_ms: 350,
            jitter_ms: 250,
            toast_ms: 3000,
            log_capacity: 200,
        }
    }
}

impl AppConfig {
    /// Parse overrides from JSON; fields not present keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Load overrides from storage, falling back to defaults.
    pub fn load<S: KeyValueStorage + ?Sized>(storage: &S) -> Self {
        match storage.get(CONFIG_KEY) {
            None => Self::default(),
            Some(raw) => match Self::from_json(&raw) {
                Ok(config) => {
                    tracing::debug!(target: "novilist::config", ?config, "loaded config overrides");
                    config
                }
                Err(e) => {
                    tracing::warn!(target: "novilist::config", error = %e, "ignoring unparseable config");
                    Self::default()
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = AppConfig::from_json(r#"{"latency_ms": 0, "recent_search_cap": 8}"#).unwrap();
        assert_eq!(config.latency_ms, 0);
        assert_eq!(config.recent_search_cap, 8);
        assert_eq!(config.toast_ms, 3000);
        assert_eq!(config.default_color_scheme, "violet");
    }

    #[test]
    fn test_load_falls_back_on_garbage() {
        let storage = MemoryStorage::new().with_value(CONFIG_KEY, "{not json");
        assert_eq!(AppConfig::load(&storage), AppConfig::default());
        assert_eq!(AppConfig::load(&MemoryStorage::new()), AppConfig::default());
    }
}
